//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the dashboard
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::calculation::IncentivePolicy;
use crate::error::{DashboardError, DashboardResult};

use super::types::{DashboardConfig, StoreConfig};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "dashboard.yaml";

/// Loads and provides access to the dashboard configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── dashboard.yaml      # Incentive policy, goals, store selection
/// └── seed_entries.yaml   # Optional entries for a fresh local store
/// ```
///
/// Relative store paths in `dashboard.yaml` are resolved against the
/// configuration directory.
///
/// # Example
///
/// ```no_run
/// use incentive_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Threshold: {}", loader.incentive_policy().base_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DashboardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::ConfigNotFound`] if `dashboard.yaml` is
    /// missing and [`DashboardError::ConfigParseError`] if it is not valid.
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let dir = path.as_ref();
        let config_path = dir.join(CONFIG_FILE_NAME);
        let mut config = Self::load_yaml::<DashboardConfig>(&config_path)?;

        if let StoreConfig::Local {
            path: store_path,
            seed_path,
        } = &mut config.store
        {
            *store_path = resolve(dir, store_path);
            if let Some(seed) = seed_path {
                *seed = resolve(dir, seed);
            }
        }

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DashboardResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DashboardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Returns the incentive policy.
    pub fn incentive_policy(&self) -> &IncentivePolicy {
        &self.config.incentive
    }

    /// Returns the store selection.
    pub fn store(&self) -> &StoreConfig {
        &self.config.store
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.incentive_policy().base_threshold, dec("500000"));
        assert_eq!(loader.incentive_policy().rate, dec("0.20"));
        assert_eq!(loader.config().goals.profit, dec("800000"));
    }

    #[test]
    fn test_local_paths_resolved_against_config_dir() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        match loader.store() {
            StoreConfig::Local { path, seed_path } => {
                assert!(path.starts_with(config_path()));
                assert!(seed_path.as_ref().unwrap().ends_with("seed_entries.yaml"));
            }
            other => panic!("expected local store, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(DashboardError::ConfigNotFound { path }) => {
                assert!(path.contains("dashboard.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "incentive: [not, a, map").unwrap();

        match ConfigLoader::load(dir.path()) {
            Err(DashboardError::ConfigParseError { path, .. }) => {
                assert!(path.contains("dashboard.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_absolute_store_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "store:\n  kind: local\n  path: /var/lib/dashboard/entries.json\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(
            loader.store(),
            &StoreConfig::Local {
                path: PathBuf::from("/var/lib/dashboard/entries.json"),
                seed_path: None,
            }
        );
    }
}
