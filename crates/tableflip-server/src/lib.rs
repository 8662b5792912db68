//! Tableflip Server - Slack slash command endpoint
//!
//! Receives `/flip`-style slash commands, verifies they came from Slack,
//! and answers with the rendered flip.

pub mod auth;
pub mod config;
pub mod delivery;
pub mod http;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, Delivery, ServerConfig, SlackConfig};

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let commands = Router::new()
        .route("/", post(http::handle_command))
        .route("/slack/commands", post(http::handle_command))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::slack_auth_middleware,
        ));

    Router::new()
        .merge(commands)
        .route("/health", get(http::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn serve(state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.addr.clone();
    if state.config.slack.signing_secret.is_none() {
        tracing::warn!("No Slack signing secret configured; request signatures are not checked");
    }

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Tableflip server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
