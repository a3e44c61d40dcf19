//! Remote table store.
//!
//! Talks to a PostgREST-style REST endpoint (`{base_url}/rest/v1/{table}`),
//! the interface exposed by hosted Postgres table services.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{EntryStore, IdAllocator};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Entry, Goals, NewEntry};

/// Primary key of the single goals row in the settings table.
const GOALS_ROW_ID: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct GoalsRow {
    id: i64,
    goals: Goals,
}

/// Entry store backed by a hosted table API.
#[derive(Debug)]
pub struct RemoteEntryStore {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
    settings_table: String,
    ids: IdAllocator,
}

impl RemoteEntryStore {
    /// Creates a store for the given project. No request is made until the
    /// first operation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::RemoteStore`] if the HTTP client cannot be
    /// built.
    pub fn new(
        base_url: &str,
        api_key: &str,
        table: &str,
        settings_table: &str,
        timeout: Duration,
    ) -> DashboardResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
            settings_table: settings_table.to_string(),
            ids: IdAllocator::new(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn row_url(&self, table: &str, id: i64) -> String {
        format!("{}?id=eq.{}", self.table_url(table), id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, request: RequestBuilder) -> DashboardResult<Response> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Remote store request failed");
        Err(DashboardError::RemoteStore {
            message: format!("{}: {}", status, body),
        })
    }

    async fn single_row(&self, response: Response, id: i64) -> DashboardResult<Entry> {
        let rows: Vec<Entry> = response.json().await?;
        existing_row(rows, id)
    }
}

/// First row of an update or delete representation; none means no row matched.
fn existing_row(rows: Vec<Entry>, id: i64) -> DashboardResult<Entry> {
    rows.into_iter()
        .next()
        .ok_or(DashboardError::EntryNotFound { id })
}

/// First row of an insert representation; none means the remote misbehaved.
fn created_row(rows: Vec<Entry>, id: i64) -> DashboardResult<Entry> {
    rows.into_iter()
        .next()
        .ok_or_else(|| DashboardError::RemoteStore {
            message: format!("create of entry {} returned no row", id),
        })
}

#[async_trait]
impl EntryStore for RemoteEntryStore {
    fn backend(&self) -> &'static str {
        "remote"
    }

    async fn list(&self) -> DashboardResult<Vec<Entry>> {
        let url = format!("{}?select=*&order=id.asc", self.table_url(&self.table));
        let response = self.send(self.client.get(&url)).await?;
        let entries: Vec<Entry> = response.json().await?;

        for entry in &entries {
            self.ids.observe(entry.id);
        }
        debug!(count = entries.len(), "Fetched entries from remote store");
        Ok(entries)
    }

    async fn add(&self, entry: NewEntry) -> DashboardResult<Entry> {
        entry.validate()?;

        let created = Entry::from_new(self.ids.next_id(), entry);
        let request = self
            .client
            .post(self.table_url(&self.table))
            .header("Prefer", "return=representation")
            .json(&created);
        let response = self.send(request).await?;
        let rows: Vec<Entry> = response.json().await?;
        created_row(rows, created.id)
    }

    async fn update(&self, id: i64, entry: NewEntry) -> DashboardResult<Entry> {
        entry.validate()?;

        let request = self
            .client
            .patch(self.row_url(&self.table, id))
            .header("Prefer", "return=representation")
            .json(&entry);
        let response = self.send(request).await?;
        self.single_row(response, id).await
    }

    async fn delete(&self, id: i64) -> DashboardResult<()> {
        let request = self
            .client
            .delete(self.row_url(&self.table, id))
            .header("Prefer", "return=representation");
        let response = self.send(request).await?;
        self.single_row(response, id).await.map(|_| ())
    }

    async fn load_goals(&self) -> DashboardResult<Option<Goals>> {
        let url = self.row_url(&self.settings_table, GOALS_ROW_ID);
        let response = self.send(self.client.get(&url)).await?;
        let rows: Vec<GoalsRow> = response.json().await?;
        Ok(rows.into_iter().next().map(|row| row.goals))
    }

    async fn save_goals(&self, goals: &Goals) -> DashboardResult<()> {
        let row = GoalsRow {
            id: GOALS_ROW_ID,
            goals: goals.clone(),
        };
        let request = self
            .client
            .post(self.table_url(&self.settings_table))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&row);
        self.send(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_store(base_url: &str) -> RemoteEntryStore {
        RemoteEntryStore::new(
            base_url,
            "anon-key",
            "entries",
            "settings",
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let store = create_store("https://example.supabase.co/");
        assert_eq!(
            store.table_url("entries"),
            "https://example.supabase.co/rest/v1/entries"
        );
        assert_eq!(
            store.row_url("entries", 42),
            "https://example.supabase.co/rest/v1/entries?id=eq.42"
        );
    }

    #[test]
    fn test_goals_row_wire_format() {
        let row = GoalsRow {
            id: GOALS_ROW_ID,
            goals: Goals::default(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["goals"]["billing"], "5000000");
    }

    #[tokio::test]
    async fn test_add_validates_before_any_request() {
        // Nothing listens on the discard port; validation must fail first.
        let store = create_store("http://127.0.0.1:9");
        let result = store
            .add(NewEntry {
                name: String::new(),
                sales: "okada".to_string(),
                affiliation: String::new(),
                client: String::new(),
                billing: Decimal::from(1),
                cost: Decimal::ZERO,
                incentive_target: Decimal::ZERO,
                month: "2026-01".to_string(),
            })
            .await;
        assert!(matches!(result, Err(DashboardError::InvalidEntry { .. })));
    }

    fn create_entry(id: i64) -> Entry {
        Entry::from_new(
            id,
            NewEntry {
                name: "a".to_string(),
                sales: "okada".to_string(),
                affiliation: String::new(),
                client: String::new(),
                billing: Decimal::from(100),
                cost: Decimal::from(50),
                incentive_target: Decimal::ZERO,
                month: "2026-01".to_string(),
            },
        )
    }

    #[test]
    fn test_empty_create_representation_is_remote_error() {
        let result = created_row(Vec::new(), 5);
        match result {
            Err(DashboardError::RemoteStore { message }) => assert!(message.contains('5')),
            other => panic!("expected remote store error, got {:?}", other),
        }
        assert_eq!(created_row(vec![create_entry(5)], 5).unwrap().id, 5);
    }

    #[test]
    fn test_empty_update_representation_is_not_found() {
        assert!(matches!(
            existing_row(Vec::new(), 9),
            Err(DashboardError::EntryNotFound { id: 9 })
        ));
        assert_eq!(existing_row(vec![create_entry(9)], 9).unwrap().id, 9);
    }

    #[tokio::test]
    async fn test_unreachable_remote_is_remote_error() {
        let store = create_store("http://127.0.0.1:9");
        let result = store.list().await;
        assert!(matches!(result, Err(DashboardError::RemoteStore { .. })));
    }
}
