//! Configuration for the front-end.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tinytoken_core::CoreError;

/// Configuration for the front-end, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Root address of the ledger API. Required in a config file.
    pub api_url: String,
    /// Balance new users start with, for display only. Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_balance: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            default_balance: None,
        }
    }
}

impl FrontendConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a file, creating parent directories as needed.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Checks that required values are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_url.trim().is_empty() {
            return Err(CoreError::ConfigError("api_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Default location of the config file, `<config_dir>/tinytoken/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tinytoken").join("config.json"))
    }
}
