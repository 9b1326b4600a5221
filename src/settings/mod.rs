// src/settings/mod.rs
use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Client settings, layered defaults <- config file <- CHEMVIS_* environment
/// variables. The only required value is the backend base URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `<config dir>/chem-visualizer/config.toml` if it
    /// exists, with environment variables (e.g. `CHEMVIS_API_BASE_URL`)
    /// taking precedence.
    pub fn load() -> Result<Self> {
        let mut builder =
            Config::builder().set_default("api_base_url", DEFAULT_API_BASE_URL)?;

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("chem-visualizer").join("config");
            builder = builder.add_source(File::with_name(&path.to_string_lossy()).required(false));
        }

        let config = builder
            .add_source(Environment::with_prefix("CHEMVIS"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
