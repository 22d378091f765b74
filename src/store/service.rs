//! The item store.
//!
//! # Responsibilities
//! - Hold the ordered item sequence and the id counter
//! - Assign ids from the counter on create
//! - Merge fields into an existing item on update
//! - Remove matching items on delete
//!
//! # Design Decisions
//! - Sequence and counter share one mutex so each operation is atomic
//! - Lock is never held across an await point (all operations are sync)
//! - Counter starts at 1 and only moves forward, even across deletes

use std::sync::{Mutex, MutexGuard};

use crate::observability::metrics;
use crate::store::error::StoreError;
use crate::store::item::{Fields, Item};
use crate::store::key::ItemKey;

/// First id handed out by a fresh store.
const FIRST_ID: u64 = 1;

struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

/// Process-wide collection of items.
pub struct ItemStore {
    inner: Mutex<Inner>,
}

impl ItemStore {
    /// Create an empty store whose first id will be `1`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation leaves the vector valid, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All items in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    /// Store a new item built from `fields` and return it.
    pub fn create(&self, fields: Fields) -> Item {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let item = Item::new(id, fields);
        inner.items.push(item.clone());
        metrics::record_stored(inner.items.len());

        tracing::debug!(id, stored = inner.items.len(), "Item created");
        item
    }

    /// Merge `fields` into the first item matching `key`.
    pub fn update(&self, key: &ItemKey, fields: Fields) -> Result<Item, StoreError> {
        let mut inner = self.lock();
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.matches(key))
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        item.merge(fields);
        tracing::debug!(key = %key, "Item updated");
        Ok(item.clone())
    }

    /// Remove every item matching `key`, returning how many were removed.
    pub fn delete(&self, key: &ItemKey) -> usize {
        let mut inner = self.lock();
        let before = inner.items.len();
        inner.items.retain(|item| !item.matches(key));
        let removed = before - inner.items.len();
        metrics::record_stored(inner.items.len());

        tracing::debug!(key = %key, removed, "Items deleted");
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
