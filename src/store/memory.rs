//! In-process record store
//!
//! Keeps entries in a concurrent map with a monotonically assigned
//! integer id. Nothing survives a restart; this backend exists for
//! tests and for running the API without hosted credentials.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::types::{Entry, EntryId, Fields};
use crate::Result;

use super::RecordStore;

/// Columns the store assigns itself; client payloads cannot set them.
const RESERVED_COLUMNS: [&str; 2] = ["id", "created_at"];

#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<i64, Entry>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn strip_reserved(mut fields: Fields) -> Fields {
        for column in RESERVED_COLUMNS {
            fields.remove(column);
        }
        fields
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Entry>> {
        let mut rows: Vec<(i64, Entry)> = self
            .entries
            .iter()
            .map(|item| (*item.key(), item.value().clone()))
            .collect();

        // Newest first; the id breaks ties between same-instant rows.
        rows.sort_by(|a, b| {
            b.1.created_at
                .cmp(&a.1.created_at)
                .then(b.0.cmp(&a.0))
        });

        Ok(rows.into_iter().map(|(_, entry)| entry).collect())
    }

    async fn insert(&self, fields: Fields) -> Result<Vec<Entry>> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let entry = Entry {
            id: EntryId::Int(id),
            created_at: Utc::now(),
            fields: Self::strip_reserved(fields),
        };

        self.entries.insert(id, entry.clone());
        Ok(vec![entry])
    }

    async fn update(&self, id: &str, fields: Fields) -> Result<Vec<Entry>> {
        let Ok(id) = id.parse::<i64>() else {
            return Ok(Vec::new());
        };

        let Some(mut entry) = self.entries.get_mut(&id) else {
            return Ok(Vec::new());
        };

        entry.fields.extend(Self::strip_reserved(fields));
        Ok(vec![entry.clone()])
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if let Ok(id) = id.parse::<i64>() {
            self.entries.remove(&id);
        }
        Ok(())
    }
}
