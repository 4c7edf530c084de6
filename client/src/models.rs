use serde::{Deserialize, Serialize};

/// Successful payload from `GET /api/proxy`. Field names are camelCase on
/// the wire; this definition mirrors the one in the server crate.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardResponse {
    pub content: String,
    pub content_type: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForwardError {
    pub error: String,
}
