pub mod config;
pub mod forwarding;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod rewrite;

use std::sync::Arc;

use axum::{routing::get, Router};

pub struct AppState {
    pub http_client: reqwest::Client,
}

/// Builds the proxy router. Shared by the binary and the integration tests.
pub fn app(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/proxy", get(forwarding::forward_handler))
        .with_state(app_state)
}
