//! Bootstrap configuration read before anything else is opened.
//!
//! Lives in `config.toml` under the platform config directory. A missing
//! file means defaults; a malformed one is logged and replaced by defaults
//! so the agenda always starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "agenda.db";

/// Where the agenda reads its appointments from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// Seeded synthetic appointments, read-only
    #[default]
    Sample,
    /// SQLite appointment store
    Database,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_source: DataSourceKind,
    /// Overrides the default database location in the platform data dir
    pub database_path: Option<PathBuf>,
    pub sample_seed: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DataSourceKind::Sample,
            database_path: None,
            sample_seed: "ngo-agenda".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the platform config dir, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = default_config_path() else {
            log::warn!("Unable to resolve project directory; using default config");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{:#}; using default config", err);
                Self::default()
            }
        }
    }

    /// Read `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Database location: the override, else the platform data dir, else cwd.
    pub fn resolve_database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }

        match project_dirs() {
            Some(dirs) => dirs.data_dir().join(DATABASE_FILE),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for database");
                PathBuf::from(DATABASE_FILE)
            }
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "NgoAgenda", "NgoAgenda")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            data_source: DataSourceKind::Database,
            database_path: Some(PathBuf::from("/tmp/clinic.db")),
            sample_seed: "physio".to_string(),
        };

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_source = \"database\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.data_source, DataSourceKind::Database);
        assert_eq!(config.sample_seed, "ngo-agenda");
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_source = [").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_database_path_override() {
        let config = AppConfig {
            database_path: Some(PathBuf::from("custom.db")),
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_database_path(), PathBuf::from("custom.db"));
    }
}
