//! Configuration model.

use crate::core::table::TableLayout;
use crate::models::movie::DEFAULT_CAPACITY;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of movies accepted from a file.
    pub capacity: usize,
    /// Table column widths.
    pub table: TableLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            table: TableLayout::default(),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_tracker")
}

/// Default location of `config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from a specific file.
///
/// `capacity` may lower the record limit but never raise it above
/// [`DEFAULT_CAPACITY`].
pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        path: path.to_path_buf(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let config: Config = toml::from_str(&content).map_err(|e| config_error(e.to_string()))?;

    if config.capacity > DEFAULT_CAPACITY {
        return Err(config_error(format!(
            "capacity {} is above the limit of {}",
            config.capacity, DEFAULT_CAPACITY
        )));
    }
    Ok(config)
}

/// Load configuration.
///
/// An explicitly given path must load cleanly. The default location is
/// optional: a missing or broken file there falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_config_from(path);
    }

    let config_path = default_config_path();
    if !config_path.exists() {
        tracing::debug!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    match load_config_from(&config_path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("Ignoring config: {}", e);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 200);
        assert_eq!(config.table, TableLayout::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "capacity = 10\n\n[table]\ntitle = 30\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.table.title, 30);
        assert_eq!(config.table.director, 20);
    }

    #[test]
    fn test_invalid_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "capacity = \"lots\"").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(matches!(load_config(Some(&path)), Err(Error::Config { .. })));
    }

    #[test]
    fn test_capacity_cannot_exceed_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        std::fs::write(&path, "capacity = 201").unwrap();
        assert!(matches!(load_config_from(&path), Err(Error::Config { .. })));

        std::fs::write(&path, "capacity = 200").unwrap();
        assert_eq!(load_config_from(&path).unwrap().capacity, DEFAULT_CAPACITY);
    }
}
