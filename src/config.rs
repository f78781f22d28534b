//! Configuration - endpoint URL loaded from a yaml file in the home directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_URL;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// URL of the user resource to fetch
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    String::from(DEFAULT_USER_URL)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to the
    /// defaults when the file is missing or unreadable
    pub fn load() -> Self {
        Self::load_from(&Self::config_path()).unwrap_or_default()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    #[allow(dead_code)] // Prepared for future in-app endpoint editing
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".profile-tui")
            .join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("config.yaml")).is_err());
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(Config::default().endpoint, DEFAULT_USER_URL);
    }

    #[test]
    fn test_load_endpoint_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "endpoint: http://localhost:8080/users/1\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/users/1");
    }

    #[test]
    fn test_empty_mapping_uses_default_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "{}\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, DEFAULT_USER_URL);
    }
}
