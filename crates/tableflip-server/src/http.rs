//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use tableflip_core::{handle, CommandInvocation};

use crate::config::Delivery;
use crate::{delivery, AppState};

/// Slack slash command payload (form-urlencoded)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SlashCommandRequest {
    pub token: String,
    pub team_id: String,
    pub team_domain: String,
    pub channel_id: String,
    pub channel_name: String,
    pub user_id: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
    pub trigger_id: String,
}

impl SlashCommandRequest {
    fn invocation(&self) -> CommandInvocation {
        CommandInvocation {
            text: self.text.clone(),
            user_id: self.user_id.clone(),
            response_url: self.response_url.clone(),
        }
    }
}

/// Handle a slash command
pub async fn handle_command(
    State(state): State<Arc<AppState>>,
    Form(request): Form<SlashCommandRequest>,
) -> Response {
    tracing::debug!(
        team = %request.team_id,
        channel = %request.channel_id,
        user = %request.user_id,
        command = %request.command,
        "Slash command received"
    );

    let reply = handle(&request.invocation());

    match state.config.slack.delivery {
        Delivery::Inline => Json(reply.response).into_response(),
        Delivery::ResponseUrl => {
            let client = state.client.clone();
            tokio::spawn(async move {
                if let Err(e) = delivery::deliver(&client, &reply).await {
                    tracing::warn!("Failed to deliver response: {}", e);
                }
            });
            StatusCode::OK.into_response()
        }
    }
}

/// Liveness check
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
