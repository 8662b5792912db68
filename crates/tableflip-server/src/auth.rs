//! Slack request verification
//!
//! Slack signs each request with `v0=hex(HMAC-SHA256(secret, "v0:<ts>:<body>"))`
//! in `X-Slack-Signature`, alongside `X-Slack-Request-Timestamp`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

use crate::config::SlackConfig;
use crate::AppState;

pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Body returned for any rejected request
pub const REJECTION_BODY: &str = "Not a Slack Request";

/// Slash command payloads are small
const MAX_BODY_BYTES: usize = 64 * 1024;

type HmacSha256 = Hmac<Sha256>;

/// Why a request was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing header: {0}")]
    MissingHeader(&'static str),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Request too old: {age_secs}s")]
    Stale { age_secs: u64 },

    #[error("Signature mismatch")]
    BadSignature,
}

fn base_mac(secret: &str, timestamp: &str, body: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(format!("v0:{}:", timestamp).as_bytes());
    mac.update(body);
    mac
}

/// Sign a request body the way Slack does.
pub fn sign(secret: &str, timestamp: &str, body: &[u8]) -> String {
    let digest = base_mac(secret, timestamp, body).finalize().into_bytes();
    format!("v0={}", hex::encode(digest))
}

fn header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, AuthError> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingHeader(name))
}

/// Verify request headers and body against the Slack settings.
///
/// The timestamp header is always required. Freshness and signature are
/// only checked when a signing secret is configured.
pub fn verify_request(
    config: &SlackConfig,
    headers: &HeaderMap,
    body: &[u8],
    now: i64,
) -> Result<(), AuthError> {
    let timestamp = header(headers, TIMESTAMP_HEADER)?;

    let Some(secret) = config.signing_secret.as_deref() else {
        return Ok(());
    };

    let sent_at: i64 = timestamp
        .trim()
        .parse()
        .map_err(|_| AuthError::InvalidTimestamp(timestamp.to_string()))?;
    let age_secs = now.abs_diff(sent_at);
    if age_secs > config.max_request_age_secs {
        return Err(AuthError::Stale { age_secs });
    }

    let signature = header(headers, SIGNATURE_HEADER)?;
    let provided = signature
        .strip_prefix("v0=")
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
        .ok_or(AuthError::BadSignature)?;

    base_mac(secret, timestamp, body)
        .verify_slice(&provided)
        .map_err(|_| AuthError::BadSignature)
}

/// Slack verification middleware
///
/// Buffers the body to check the signature, then hands an identical
/// request to the next handler.
pub async fn slack_auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read request body: {}", e);
            return (StatusCode::BAD_REQUEST, "Unreadable body").into_response();
        }
    };

    let now = chrono::Utc::now().timestamp();
    if let Err(e) = verify_request(&state.config.slack, &parts.headers, &bytes, now) {
        tracing::warn!("Rejected request to {}: {}", parts.uri.path(), e);
        return (StatusCode::UNAUTHORIZED, REJECTION_BODY).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
