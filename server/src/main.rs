use std::sync::Arc;

use siteview_server::config::Config;
use siteview_server::{app, logging, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::setup_tracing();

    info!("Starting Siteview Proxy Server...");

    let config = Config::new();

    let http_client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.fetch_timeout)
        .build()
        .expect("Failed to build outbound HTTP client");

    let app_state = Arc::new(AppState { http_client });

    let listener = TcpListener::bind(&config.bind_addr).await.unwrap();
    info!("Listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app(app_state)).await.unwrap();
}
