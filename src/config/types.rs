//! Configuration types for the incentive dashboard.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `dashboard.yaml` configuration file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::calculation::IncentivePolicy;
use crate::models::{Goals, Settings};

fn default_local_path() -> PathBuf {
    PathBuf::from("data/entries.json")
}

fn default_table() -> String {
    "entries".to_string()
}

fn default_settings_table() -> String {
    "settings".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Which entry store to open at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    /// A JSON file on the local filesystem.
    Local {
        /// Path of the JSON document holding entries and goals.
        #[serde(default = "default_local_path")]
        path: PathBuf,
        /// Optional YAML file of entries loaded when `path` does not exist yet.
        #[serde(default)]
        seed_path: Option<PathBuf>,
    },
    /// A PostgREST-style remote table store.
    Remote {
        /// Base URL of the project, without the `/rest/v1` suffix.
        base_url: String,
        /// API key sent as both `apikey` and bearer token.
        api_key: String,
        /// Table holding entries.
        #[serde(default = "default_table")]
        table: String,
        /// Table holding the goals row.
        #[serde(default = "default_settings_table")]
        settings_table: String,
        /// Request timeout in seconds.
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Local {
            path: default_local_path(),
            seed_path: None,
        }
    }
}

/// The complete dashboard configuration loaded from `dashboard.yaml`.
///
/// Every section is optional; missing sections take the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Incentive threshold and rate.
    #[serde(default)]
    pub incentive: IncentivePolicy,
    /// Initial monthly goals, used until goals are saved to the store.
    #[serde(default)]
    pub goals: Goals,
    /// The sales representative using this dashboard.
    #[serde(default)]
    pub current_user: Option<String>,
    /// Entry store selection.
    #[serde(default)]
    pub store: StoreConfig,
}

impl DashboardConfig {
    /// Returns the initial settings described by this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            current_user: self.current_user.clone(),
            goals: self.goals.clone(),
        }
    }
}
