//! Configuration loading and management for the incentive dashboard.
//!
//! This module loads the dashboard configuration from YAML: the incentive
//! policy, the initial goals and current user, and which entry store to
//! open.
//!
//! # Example
//!
//! ```no_run
//! use incentive_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Incentive rate: {}", config.incentive_policy().rate);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DashboardConfig, StoreConfig};
