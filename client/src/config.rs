use crate::config_manager;
use crate::normalize;
use crate::utils::{get_input_with_default, get_required_input};
use dotenvy::dotenv;
use std::env;
use url::Url;

pub struct AppConfig {
    pub server_url: String,
    pub target: Url,
    pub output_path: String,
}

impl AppConfig {
    pub fn new() -> Self {
        dotenv().ok();

        let saved = config_manager::load_settings().unwrap_or_default();

        let server_url_default = env::var("SERVER_URL")
            .ok()
            .or(saved.server_url)
            .unwrap_or_else(|| "http://localhost:3000".to_string());
        let server_url = get_server_url(&server_url_default);

        let target = get_target_address(saved.last_address.as_deref());

        let output_path = get_input_with_default("Write fetched page to", "preview.html");

        Self {
            server_url,
            target,
            output_path,
        }
    }
}

fn get_server_url(default_value: &str) -> String {
    loop {
        let input = get_input_with_default("Enter Siteview Server URL", default_value);

        match Url::parse(&input) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => return input,
            Ok(_) => {
                eprintln!("The server URL must start with 'http://' or 'https://'. Please try again.")
            }
            Err(e) => eprintln!("Invalid URL: {}. Please try again.", e),
        }
    }
}

fn get_target_address(last_address: Option<&str>) -> Url {
    println!("\nEnter the web address to preview (e.g. example.com).");

    loop {
        let input = match last_address {
            Some(last) => get_input_with_default("Web address", last),
            None => get_required_input("Web address"),
        };

        match normalize::normalize_address(&input) {
            Ok(url) => return url,
            Err(e) => eprintln!("{}. Please try again.", e),
        }
    }
}
