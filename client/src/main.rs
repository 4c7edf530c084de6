mod config;
mod config_manager;
mod http_handler;
mod logging;
mod models;
mod normalize;
mod utils;

use std::time::Duration;

use config::AppConfig;
use reqwest::Client;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    logging::init_subscriber();

    info!("Starting Siteview Client...");

    let config = AppConfig::new();

    let http_client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build request client");

    match http_handler::fetch_preview(&http_client, &config.server_url, &config.target).await {
        Ok(preview) => {
            if let Err(e) = std::fs::write(&config.output_path, &preview.content) {
                error!("Failed to write {}: {}", config.output_path, e);
                eprintln!("\nERROR: Could not write the fetched page to '{}': {}", config.output_path, e);
                return;
            }

            println!("\nPreview fetched!");
            println!("  URL:          {}", preview.url);
            println!("  Content-Type: {}", preview.content_type);
            println!("  Saved:        {} ({} bytes)", config.output_path, preview.content.len());

            if let Err(e) = config_manager::remember_session(&config) {
                warn!("Failed to save session defaults: {}", e);
            }
        }
        Err(e) => {
            error!("Preview request failed: {}", e);
            eprintln!("\nERROR: {}", e);
        }
    }

    info!("Siteview Client shutting down.");
}
