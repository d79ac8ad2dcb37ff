//! Configuration loading and management

mod io;
mod settings;

pub use settings::{NearbySettings, ReportSettings, Settings};

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Load the config at `path`, or the global config when `None`.
    ///
    /// A missing file yields the defaults; a file that exists but cannot be
    /// parsed is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::with_defaults());
        }

        Self::from_file(&path)
    }

    /// Default database location (~/.starlog/observations.db)
    pub fn default_database_path() -> PathBuf {
        Self::global_config_dir().join("observations.db")
    }

    /// Database path from settings, falling back to the default location
    pub fn database_path(&self) -> PathBuf {
        self.settings
            .database_path
            .clone()
            .unwrap_or_else(Self::default_database_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::with_defaults());
        assert_eq!(config.settings.report.next_to_earn_limit, 3);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[settings]\ndatabase_path = \"/tmp/sky.db\"\n\n[settings.report]\nshowcase_limit = 8\n",
        )
        .unwrap();

        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.settings.report.showcase_limit, 8);
        assert_eq!(config.settings.report.next_to_earn_limit, 3);
        assert_eq!(config.settings.nearby.radius_km, 50.0);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/sky.db"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings\nbroken").unwrap();
        assert!(Config::load_or_default(Some(&path)).is_err());
    }
}
