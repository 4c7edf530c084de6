use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, info};

use crate::models::{ForwardError, ForwardResponse};
use crate::normalize::{self, NormalizeError};
use crate::rewrite;
use crate::AppState;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing or invalid URL parameter")]
    MissingParameter,
    #[error("{0}")]
    Address(#[from] NormalizeError),
    #[error("Failed to fetch URL: {status_text}")]
    Upstream {
        status: StatusCode,
        status_text: String,
    },
    #[error("Request to upstream timed out")]
    Timeout,
    #[error("Failed to proxy request: {0}")]
    Internal(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParameter => StatusCode::BAD_REQUEST,
            ProxyError::Address(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ForwardError {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProxyError::Timeout
        } else {
            ProxyError::Internal(err.to_string())
        }
    }
}

/// Fetches the document behind the `url` query parameter and returns it as
/// JSON, with a `<base>` tag injected into HTML bodies so relative links
/// resolve against the fetched page's origin.
#[axum::debug_handler]
pub async fn forward_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query_params): Query<HashMap<String, String>>,
) -> Result<Json<ForwardResponse>, ProxyError> {
    let raw_url = query_params.get("url").map(String::as_str).unwrap_or("");
    if raw_url.trim().is_empty() {
        return Err(ProxyError::MissingParameter);
    }

    let target = normalize::normalize_address(raw_url)?;
    info!("Forwarding request to: {}", target);

    let response = app_state
        .http_client
        .get(target.clone())
        .send()
        .await
        .map_err(|e| {
            error!("Outbound request to {} failed: {:?}", target, e);
            ProxyError::from(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        info!("Upstream {} responded with status {}", target, status);
        return Err(ProxyError::Upstream {
            status: StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            status_text: status.canonical_reason().unwrap_or("Unknown Error").to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    // Redirects are followed by the client, so this is where we ended up,
    // not necessarily what was asked for.
    let final_url = response.url().clone();

    let mut content = response.text().await.map_err(|e| {
        error!("Failed to read body from {}: {:?}", final_url, e);
        ProxyError::from(e)
    })?;

    if content_type.contains("text/html") {
        content = rewrite::inject_base_tag(&content, &rewrite::page_origin(&final_url));
    }

    Ok(Json(ForwardResponse {
        content,
        content_type,
        url: final_url.to_string(),
    }))
}
