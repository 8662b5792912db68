//! Delivery of responses to Slack's `response_url`

use tableflip_core::CommandReply;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Request has no response_url")]
    MissingUrl,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Slack returned {0}")]
    Status(reqwest::StatusCode),
}

/// POST the response JSON to the reply's `response_url`. Not retried.
pub async fn deliver(client: &reqwest::Client, reply: &CommandReply) -> Result<(), DeliveryError> {
    if reply.response_url.is_empty() {
        return Err(DeliveryError::MissingUrl);
    }

    let response = client
        .post(&reply.response_url)
        .json(&reply.response)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DeliveryError::Status(status));
    }

    tracing::debug!("Delivered response to {}", reply.response_url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableflip_core::route;

    #[tokio::test]
    async fn test_missing_url_is_rejected() {
        let reply = CommandReply {
            response: route("flip -table", "U1"),
            response_url: String::new(),
        };
        let err = deliver(&reqwest::Client::new(), &reply).await.unwrap_err();
        assert!(matches!(err, DeliveryError::MissingUrl));
    }
}
