// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory settings repository.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use plugset_core::{PluginRecord, PlugsetError, SettingsRepository};

#[derive(Default)]
struct Store {
    records: HashMap<String, PluginRecord>,
    next_id: i64,
    upserts: Vec<PluginRecord>,
    lookups: Vec<String>,
}

/// Keeps records in a map, assigns sequential ids from 1, and records every
/// upsert exactly as it was received.
#[derive(Default)]
pub struct InMemorySettingsRepository {
    store: Mutex<Store>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored record, assigning it the next id.
    pub fn insert(&self, plugin_id: &str, configuration: Option<&str>) -> PluginRecord {
        let mut store = self.lock();
        store.next_id += 1;
        let record =
            PluginRecord::new(plugin_id, configuration.map(str::to_string)).with_id(store.next_id);
        store.records.insert(plugin_id.to_string(), record.clone());
        record
    }

    pub fn record(&self, plugin_id: &str) -> Option<PluginRecord> {
        self.lock().records.get(plugin_id).cloned()
    }

    /// Records passed to `upsert`, before ids were assigned.
    pub fn upserts(&self) -> Vec<PluginRecord> {
        self.lock().upserts.clone()
    }

    pub fn upsert_count(&self) -> usize {
        self.lock().upserts.len()
    }

    /// Plugin ids passed to `find_by_plugin_id`.
    pub fn lookups(&self) -> Vec<String> {
        self.lock().lookups.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find_by_plugin_id(&self, plugin_id: &str) -> Result<Option<PluginRecord>, PlugsetError> {
        let mut store = self.lock();
        store.lookups.push(plugin_id.to_string());
        Ok(store.records.get(plugin_id).cloned())
    }

    async fn upsert(&self, record: PluginRecord) -> Result<PluginRecord, PlugsetError> {
        let mut store = self.lock();
        store.upserts.push(record.clone());
        let saved = match record.id {
            Some(_) => record,
            None => match store.records.get(&record.plugin_id).and_then(|r| r.id) {
                Some(id) => record.with_id(id),
                None => {
                    store.next_id += 1;
                    let id = store.next_id;
                    record.with_id(id)
                }
            },
        };
        store.records.insert(saved.plugin_id.clone(), saved.clone());
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_and_preserved() {
        let repo = InMemorySettingsRepository::new();
        let a = repo.upsert(PluginRecord::new("a", None)).await.unwrap();
        let b = repo.upsert(PluginRecord::new("b", None)).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));

        let again = repo
            .upsert(PluginRecord::new("a", Some("{}".into())))
            .await
            .unwrap();
        assert_eq!(again.id, Some(1));
        assert_eq!(repo.upsert_count(), 3);
        assert_eq!(repo.upserts()[0].id, None);
    }
}
