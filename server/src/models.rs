use serde::{Deserialize, Serialize};

/// Payload returned for a successfully proxied page.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ForwardResponse {
    pub content: String,
    pub content_type: String,
    pub url: String,
}

/// Error payload carried by every non-2xx response from the endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ForwardError {
    pub error: String,
}
