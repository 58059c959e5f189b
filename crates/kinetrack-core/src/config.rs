//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which includes the API base address and the last used RUT.
//!
//! Configuration is stored at `~/.config/kinetrack/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "kinetrack";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Fixed URL prefix for all API calls unless overridden
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides the configured base address
const API_URL_ENV: &str = "KINETRACK_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub last_rut: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the API base address: environment variable, then config file,
    /// then the built-in default.
    pub fn api_base_url(&self) -> String {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_when_unconfigured() {
        let config = Config::default();
        if std::env::var(API_URL_ENV).is_err() {
            assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        }
    }

    #[test]
    fn test_config_file_overrides_default() {
        if std::env::var(API_URL_ENV).is_ok() {
            return;
        }
        let config = Config {
            api_base_url: Some("https://clinica.example.com/api".to_string()),
            last_rut: None,
        };
        assert_eq!(config.api_base_url(), "https://clinica.example.com/api");
    }
}
