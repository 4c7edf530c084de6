use crate::config::AppConfig;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

const SETTINGS_FILE_NAME: &str = "siteview_client.json";

/// Prompt defaults remembered between runs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClientSettings {
    pub server_url: Option<String>,
    pub last_address: Option<String>,
}

/// Returns the platform-specific path to the settings file.
fn get_settings_path() -> Result<PathBuf, std::io::Error> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not find a config directory",
        )
    })?;
    let app_config_dir = config_dir.join("siteview");
    fs::create_dir_all(&app_config_dir)?;
    Ok(app_config_dir.join(SETTINGS_FILE_NAME))
}

/// Loads the saved settings. A missing file is not an error.
pub fn load_settings() -> Result<ClientSettings, Box<dyn std::error::Error>> {
    let path = get_settings_path()?;
    if !path.exists() {
        return Ok(ClientSettings::default());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let settings = serde_json::from_reader(reader)?;
    Ok(settings)
}

/// Saves this run's choices as the next run's prompt defaults.
pub fn remember_session(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let settings = ClientSettings {
        server_url: Some(config.server_url.clone()),
        last_address: Some(config.target.to_string()),
    };
    let path = get_settings_path()?;
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &settings)?;
    Ok(())
}
