use crate::models::{ForwardError, ForwardResponse};
use reqwest::Client;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Server(String),
    #[error("Failed to reach the Siteview server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned an unexpected payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Asks the forwarding endpoint for `target` and decodes the JSON payload.
///
/// Non-2xx responses carry a `ForwardError` body whose message is surfaced
/// as-is; anything else that arrives on a non-2xx status gets a fallback
/// message with the status code.
pub async fn fetch_preview(
    http_client: &Client,
    server_url: &str,
    target: &Url,
) -> Result<ForwardResponse, FetchError> {
    let endpoint = format!("{}/api/proxy", server_url.trim_end_matches('/'));
    info!("Requesting preview of {} via {}", target, endpoint);

    let response = http_client
        .get(&endpoint)
        .query(&[("url", target.as_str())])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ForwardError>(&body)
            .map(|payload| payload.error)
            .unwrap_or_else(|_| format!("Server responded with status {}", status));
        error!("Preview request failed with status {}: {}", status, message);
        return Err(FetchError::Server(message));
    }

    info!("Received preview payload ({} bytes)", body.len());
    Ok(serde_json::from_str(&body)?)
}
