use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Some origins reject requests without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub bind_addr: String,
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn new() -> Self {
        dotenv().ok();
        let port = env::var("PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let fetch_timeout = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
        let user_agent =
            env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        Self {
            bind_addr: format!("0.0.0.0:{}", port),
            fetch_timeout,
            user_agent,
        }
    }
}
