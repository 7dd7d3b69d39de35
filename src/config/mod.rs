//! Configuration management for untappdctl
//!
//! Handles loading and validating CLI configuration: API credentials, the
//! API base URL and the request timeout.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod credentials;
pub mod defaults;

pub use credentials::Credentials;
pub use defaults::*;

/// Main CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// API credentials
    #[serde(default)]
    pub credentials: Credentials,

    /// Untappd APIv4 base URL
    #[serde(default = "defaults::default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::default_timeout")]
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from the default location
    ///
    /// Tries in order:
    /// 1. `XDG_CONFIG_HOME/untappdctl/config.toml`
    /// 2. `~/.config/untappdctl/config.toml`
    ///
    /// A missing file, or no resolvable config directory, yields the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] or [`Error::InvalidConfig`] when the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_optional(Self::config_path().as_deref())
    }

    /// Load configuration from a specific path, which must exist
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read and
    /// [`Error::InvalidConfig`] if it is not valid TOML for [`Config`].
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&contents).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Path of the default config file, if a config directory can be found
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok();
        config_path_in(xdg_config_home.as_deref(), dirs::home_dir())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty base URL or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::InvalidConfig("base_url cannot be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_path_in(xdg_config_home: Option<&str>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(".config")))
        .map(|dir| dir.join(crate::NAME).join("config.toml"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.untappd.com/v4/");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.credentials.is_configured());
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());

        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [credentials]
            client_id = "abc"
            client_secret = "def"
            "#,
        )
        .unwrap();
        assert!(config.credentials.is_configured());
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.timeout_secs, default_timeout());
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let err = Config::load_from(Path::new("/nonexistent/untappdctl.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_config_path_resolution() {
        assert_eq!(
            config_path_in(Some("/xdg"), Some(PathBuf::from("/home/u"))),
            Some(PathBuf::from("/xdg/untappdctl/config.toml"))
        );
        assert_eq!(
            config_path_in(Some(""), Some(PathBuf::from("/home/u"))),
            Some(PathBuf::from("/home/u/.config/untappdctl/config.toml"))
        );
        assert_eq!(config_path_in(None, None), None);
    }

    #[test]
    fn test_no_config_directory_yields_defaults() {
        let config = Config::load_optional(None).unwrap();
        assert_eq!(config.base_url, default_base_url());
        assert!(!config.credentials.is_configured());

        let missing = Config::load_optional(Some(Path::new("/nonexistent/untappdctl.toml"))).unwrap();
        assert_eq!(missing.timeout_secs, default_timeout());
    }
}
