//! Item storage.
//!
//! The core only needs three operations from a store, so a durable backend
//! can stand in for [`MemoryStore`] without touching the scheduler or the
//! session logic.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::types::Item;

/// Repository for items and their scheduling fields.
pub trait ItemStore {
    fn get(&self, id: Uuid) -> Result<Option<Item>>;
    fn upsert(&mut self, item: Item) -> Result<()>;
    /// Items with `next_review_at <= now`, earliest first.
    fn query_due(&self, now: DateTime<Utc>) -> Result<Vec<Item>>;
}

/// In-memory store preserving insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<Uuid, Item>,
    order: Vec<Uuid>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up an item by its normalized text.
    pub fn find_by_text(&self, text: &str) -> Option<&Item> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .find(|item| item.text() == text)
    }

    /// Insert a freshly extracted batch, skipping words already stored.
    /// Returns the items actually inserted, in batch order.
    pub fn insert_batch(&mut self, items: Vec<Item>) -> Vec<Item> {
        let mut inserted = Vec::with_capacity(items.len());
        for item in items {
            if self.find_by_text(item.text()).is_some() {
                debug!(text = item.text(), "skipping word already in store");
                continue;
            }
            self.insert(item.clone());
            inserted.push(item);
        }
        inserted
    }

    /// All items in insertion order.
    pub fn all(&self) -> Vec<Item> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .collect()
    }

    fn insert(&mut self, item: Item) {
        let id = item.id();
        if self.items.insert(id, item).is_none() {
            self.order.push(id);
        }
    }
}

impl ItemStore for MemoryStore {
    fn get(&self, id: Uuid) -> Result<Option<Item>> {
        Ok(self.items.get(&id).cloned())
    }

    fn upsert(&mut self, item: Item) -> Result<()> {
        self.insert(item);
        Ok(())
    }

    fn query_due(&self, now: DateTime<Utc>) -> Result<Vec<Item>> {
        let mut due: Vec<Item> = self
            .order
            .iter()
            .filter_map(|id| self.items.get(id))
            .filter(|item| item.is_due(now))
            .cloned()
            .collect();
        // stable sort keeps insertion order among equal due times
        due.sort_by_key(|item| item.next_review_at());
        Ok(due)
    }
}
