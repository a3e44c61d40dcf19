//! Local JSON file store.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{EntryStore, IdAllocator};
use crate::config::ConfigLoader;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Entry, Goals, NewEntry};

/// On-disk layout of the local store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LocalDocument {
    #[serde(default)]
    entries: Vec<Entry>,
    #[serde(default)]
    goals: Option<Goals>,
}

/// Entry store backed by a single JSON document.
///
/// The document is read once when the store is opened and rewritten in
/// full after every change. Writes go to a temporary file that is then
/// renamed over the document, so a failed write leaves the previous
/// version in place and the in-memory copy unchanged.
#[derive(Debug)]
pub struct LocalEntryStore {
    path: PathBuf,
    document: RwLock<LocalDocument>,
    ids: IdAllocator,
}

impl LocalEntryStore {
    /// Opens the document at `path`.
    ///
    /// When `path` does not exist the store starts empty, or with the
    /// entries of `seed_path` if one is given. Nothing is written until the
    /// first change.
    ///
    /// # Errors
    ///
    /// Besides I/O and parse failures, returns
    /// [`DashboardError::InvalidEntry`] if a loaded entry fails validation and
    /// [`DashboardError::StoreSerialization`] if two entries share an id.
    pub async fn open(path: &Path, seed_path: Option<&Path>) -> DashboardResult<Self> {
        let document = if tokio::fs::try_exists(path).await.map_err(|e| io_error(path, e))? {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| io_error(path, e))?;
            serde_json::from_str::<LocalDocument>(&content)?
        } else if let Some(seed) = seed_path {
            let entries: Vec<Entry> = ConfigLoader::load_yaml(seed)?;
            info!(seed = %seed.display(), count = entries.len(), "Seeding local store");
            LocalDocument {
                entries,
                goals: None,
            }
        } else {
            LocalDocument::default()
        };

        check_entries(&document.entries)?;

        let ids = IdAllocator::new();
        for entry in &document.entries {
            ids.observe(entry.id);
        }

        debug!(path = %path.display(), count = document.entries.len(), "Local store loaded");

        Ok(Self {
            path: path.to_path_buf(),
            document: RwLock::new(document),
            ids,
        })
    }

    /// Returns the path of the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, document: &LocalDocument) -> DashboardResult<()> {
        let json = serde_json::to_string_pretty(document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| io_error(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))
    }
}

/// Validates every loaded entry and rejects repeated ids.
fn check_entries(entries: &[Entry]) -> DashboardResult<()> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(entries.len());
    for entry in entries {
        entry.validate()?;
        if !seen.insert(entry.id) {
            return Err(DashboardError::StoreSerialization {
                message: format!("duplicate entry id {}", entry.id),
            });
        }
    }
    Ok(())
}

fn io_error(path: &Path, err: std::io::Error) -> DashboardError {
    DashboardError::StoreIo {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl EntryStore for LocalEntryStore {
    fn backend(&self) -> &'static str {
        "local"
    }

    async fn list(&self) -> DashboardResult<Vec<Entry>> {
        Ok(self.document.read().await.entries.clone())
    }

    async fn add(&self, entry: NewEntry) -> DashboardResult<Entry> {
        entry.validate()?;

        let mut document = self.document.write().await;
        let created = Entry::from_new(self.ids.next_id(), entry);

        let mut next = document.clone();
        next.entries.push(created.clone());
        self.persist(&next).await?;
        *document = next;

        Ok(created)
    }

    async fn update(&self, id: i64, entry: NewEntry) -> DashboardResult<Entry> {
        entry.validate()?;

        let mut document = self.document.write().await;
        let position = document
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(DashboardError::EntryNotFound { id })?;

        let updated = Entry::from_new(id, entry);
        let mut next = document.clone();
        next.entries[position] = updated.clone();
        self.persist(&next).await?;
        *document = next;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> DashboardResult<()> {
        let mut document = self.document.write().await;
        if !document.entries.iter().any(|e| e.id == id) {
            return Err(DashboardError::EntryNotFound { id });
        }

        let mut next = document.clone();
        next.entries.retain(|e| e.id != id);
        self.persist(&next).await?;
        *document = next;

        Ok(())
    }

    async fn load_goals(&self) -> DashboardResult<Option<Goals>> {
        Ok(self.document.read().await.goals.clone())
    }

    async fn save_goals(&self, goals: &Goals) -> DashboardResult<()> {
        let mut document = self.document.write().await;
        let mut next = document.clone();
        next.goals = Some(goals.clone());
        self.persist(&next).await?;
        *document = next;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{filter_by_month, filter_by_sales};
    use crate::models::SalesFilter;
    use rust_decimal::Decimal;

    fn create_new_entry(name: &str, month: &str) -> NewEntry {
        NewEntry {
            name: name.to_string(),
            sales: "okada".to_string(),
            affiliation: "Employee".to_string(),
            client: "Habataku Co.".to_string(),
            billing: Decimal::from(620_000),
            cost: Decimal::from(480_000),
            incentive_target: Decimal::from(48_000),
            month: month.to_string(),
        }
    }

    async fn open_empty(dir: &tempfile::TempDir) -> LocalEntryStore {
        LocalEntryStore::open(&dir.path().join("entries.json"), None)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_empty(&dir).await;

        let a = store.add(create_new_entry("a", "2026-01")).await.unwrap();
        let b = store.add(create_new_entry("b", "2026-01")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_added_entry_found_once_by_month_and_sales() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_empty(&dir).await;
        store.add(create_new_entry("other", "2026-02")).await.unwrap();
        let added = store.add(create_new_entry("Ryo Momose", "2026-03")).await.unwrap();

        let entries = store.list().await.unwrap();
        let by_sales = filter_by_sales(&entries, &SalesFilter::from("okada"));
        let found = filter_by_month(by_sales, "2026-03");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], &added);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_empty(&dir).await;

        let result = store.add(create_new_entry("a", "March")).await;
        assert!(matches!(result, Err(DashboardError::InvalidEntry { .. })));
        assert!(store.list().await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_but_keeps_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_empty(&dir).await;
        let added = store.add(create_new_entry("a", "2026-01")).await.unwrap();

        let mut replacement = create_new_entry("renamed", "2026-02");
        replacement.billing = Decimal::from(1);
        let updated = store.update(added.id, replacement).await.unwrap();

        assert_eq!(updated.id, added.id);
        assert_eq!(updated.name, "renamed");
        assert_eq!(store.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_empty(&dir).await;

        let result = store.update(99, create_new_entry("a", "2026-01")).await;
        assert!(matches!(result, Err(DashboardError::EntryNotFound { id: 99 })));
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_empty(&dir).await;
        let a = store.add(create_new_entry("a", "2026-01")).await.unwrap();
        let b = store.add(create_new_entry("b", "2026-01")).await.unwrap();

        store.delete(a.id).await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec![b]);

        let again = store.delete(a.id).await;
        assert!(matches!(again, Err(DashboardError::EntryNotFound { .. })));
    }

    #[tokio::test]
    async fn test_changes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("entries.json");

        let store = LocalEntryStore::open(&path, None).await.unwrap();
        let added = store.add(create_new_entry("a", "2026-01")).await.unwrap();
        let goals = Goals {
            billing: Decimal::from(1),
            profit: Decimal::from(2),
            incentive: Decimal::from(3),
        };
        store.save_goals(&goals).await.unwrap();
        drop(store);

        let reopened = LocalEntryStore::open(&path, None).await.unwrap();
        assert_eq!(reopened.list().await.unwrap(), vec![added.clone()]);
        assert_eq!(reopened.load_goals().await.unwrap(), Some(goals));

        let next = reopened.add(create_new_entry("b", "2026-01")).await.unwrap();
        assert!(next.id > added.id);
    }

    #[tokio::test]
    async fn test_goals_absent_until_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_empty(&dir).await;
        assert_eq!(store.load_goals().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_seeds_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.yaml");
        std::fs::write(
            &seed,
            "- id: 7\n  name: a\n  sales: okada\n  billing: 100\n  cost: 50\n  month: \"2025-01\"\n",
        )
        .unwrap();

        let store = LocalEntryStore::open(&dir.path().join("entries.json"), Some(&seed))
            .await
            .unwrap();
        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 7);

        let added = store.add(create_new_entry("b", "2025-01")).await.unwrap();
        assert!(added.id > 7);
    }

    #[tokio::test]
    async fn test_open_rejects_duplicate_seed_ids() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.yaml");
        std::fs::write(
            &seed,
            "- id: 7\n  name: a\n  sales: okada\n  billing: 100\n  cost: 50\n  month: \"2025-01\"\n\
             - id: 7\n  name: b\n  sales: okada\n  billing: 200\n  cost: 50\n  month: \"2025-02\"\n",
        )
        .unwrap();

        let result = LocalEntryStore::open(&dir.path().join("entries.json"), Some(&seed)).await;
        match result {
            Err(DashboardError::StoreSerialization { message }) => assert!(message.contains('7')),
            other => panic!("expected duplicate id error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_open_rejects_duplicate_document_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let entry = Entry::from_new(3, create_new_entry("a", "2026-01"));
        std::fs::write(
            &path,
            serde_json::json!({ "entries": [entry.clone(), entry] }).to_string(),
        )
        .unwrap();

        let result = LocalEntryStore::open(&path, None).await;
        assert!(matches!(
            result,
            Err(DashboardError::StoreSerialization { .. })
        ));
    }

    #[tokio::test]
    async fn test_open_rejects_invalid_seed_entry() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.yaml");
        std::fs::write(
            &seed,
            "- id: 1\n  name: a\n  sales: okada\n  billing: 100\n  cost: 50\n  month: \"March\"\n",
        )
        .unwrap();

        let result = LocalEntryStore::open(&dir.path().join("entries.json"), Some(&seed)).await;
        match result {
            Err(DashboardError::InvalidEntry { field, .. }) => assert_eq!(field, "month"),
            other => panic!("expected month error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_open_corrupt_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = LocalEntryStore::open(&path, None).await;
        assert!(matches!(
            result,
            Err(DashboardError::StoreSerialization { .. })
        ));
    }
}
