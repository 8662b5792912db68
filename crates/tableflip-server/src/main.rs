//! Tableflip Server Binary

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tableflip_server::{serve, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::load()?;
    let state = Arc::new(AppState::new(config));

    serve(state).await
}
