//! Configuration management

use std::sync::OnceLock;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the property-services REST backend.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_port() -> u16 {
    3000
}

fn default_api_base() -> String {
    "http://localhost:8000/api".to_string()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            port: default_port(),
            api_base: default_api_base(),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let config_dir = directories::ProjectDirs::from("com", "propcare", "propcare")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 3000)?
        .set_default("api_base", default_api_base())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (PROPCARE_PORT, PROPCARE_API_BASE, etc.)
        .add_source(
            ::config::Environment::with_prefix("PROPCARE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

static SETTINGS: OnceLock<Config> = OnceLock::new();

/// Installs the loaded configuration for the rest of the process.
pub fn init(config: Config) {
    let _ = SETTINGS.set(config);
}

/// Process-wide settings; defaults apply until [`init`] runs.
pub fn settings() -> &'static Config {
    SETTINGS.get_or_init(Config::default)
}
