//! Entry persistence for the incentive dashboard.
//!
//! [`EntryStore`] is the capability the rest of the crate depends on. Two
//! implementations exist: [`RemoteEntryStore`] talks to a hosted table API
//! and [`LocalEntryStore`] keeps a JSON document on disk. [`open_store`]
//! picks one from the configuration once at startup; call sites never
//! branch on which backend is in use.

mod ids;
mod local;
mod remote;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::StoreConfig;
use crate::error::DashboardResult;
use crate::models::{Entry, Goals, NewEntry};

pub use ids::IdAllocator;
pub use local::LocalEntryStore;
pub use remote::RemoteEntryStore;

/// Create, read, update and delete access to the entry collection, plus the
/// saved goals.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Short backend name used in logs.
    fn backend(&self) -> &'static str;

    /// Returns every entry, in insertion order.
    async fn list(&self) -> DashboardResult<Vec<Entry>>;

    /// Validates and stores a new entry, assigning its id.
    async fn add(&self, entry: NewEntry) -> DashboardResult<Entry>;

    /// Validates and replaces every field of the entry with `id`.
    async fn update(&self, id: i64, entry: NewEntry) -> DashboardResult<Entry>;

    /// Removes the entry with `id`.
    async fn delete(&self, id: i64) -> DashboardResult<()>;

    /// Returns the saved goals, if goals were ever saved.
    async fn load_goals(&self) -> DashboardResult<Option<Goals>>;

    /// Saves the goals.
    async fn save_goals(&self, goals: &Goals) -> DashboardResult<()>;
}

/// Opens the store described by `config`.
///
/// # Errors
///
/// Returns an error if the local document or seed file cannot be read, or
/// if the remote HTTP client cannot be built.
pub async fn open_store(config: &StoreConfig) -> DashboardResult<Arc<dyn EntryStore>> {
    let store: Arc<dyn EntryStore> = match config {
        StoreConfig::Local { path, seed_path } => {
            Arc::new(LocalEntryStore::open(path, seed_path.as_deref()).await?)
        }
        StoreConfig::Remote {
            base_url,
            api_key,
            table,
            settings_table,
            timeout_secs,
        } => Arc::new(RemoteEntryStore::new(
            base_url,
            api_key,
            table,
            settings_table,
            std::time::Duration::from_secs(*timeout_secs),
        )?),
    };

    info!(backend = store.backend(), "Entry store opened");
    Ok(store)
}
