//! Application state for the incentive dashboard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::calculation::IncentivePolicy;
use crate::config::ConfigLoader;
use crate::error::DashboardResult;
use crate::models::Settings;
use crate::store::{EntryStore, open_store};

/// Shared application state.
///
/// Holds the entry store chosen at startup, the incentive policy, and the
/// current settings.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EntryStore>,
    policy: IncentivePolicy,
    settings: Arc<RwLock<Settings>>,
}

impl AppState {
    /// Creates a new application state from its parts.
    pub fn new(store: Arc<dyn EntryStore>, policy: IncentivePolicy, settings: Settings) -> Self {
        Self {
            store,
            policy,
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Opens the configured store and builds the state.
    ///
    /// Goals saved in the store take precedence over the configured ones.
    pub async fn initialize(config: &ConfigLoader) -> DashboardResult<Self> {
        let store = open_store(config.store()).await?;

        let mut settings = config.config().settings();
        if let Some(goals) = store.load_goals().await? {
            info!("Using goals saved in the entry store");
            settings.goals = goals;
        }

        Ok(Self::new(store, *config.incentive_policy(), settings))
    }

    /// Returns the entry store.
    pub fn store(&self) -> &dyn EntryStore {
        self.store.as_ref()
    }

    /// Returns the incentive policy.
    pub fn policy(&self) -> &IncentivePolicy {
        &self.policy
    }

    /// Returns a snapshot of the current settings.
    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Replaces the current settings.
    pub async fn set_settings(&self, settings: Settings) {
        *self.settings.write().await = settings;
    }
}
