//! In-memory record store.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use idbazaar_core::{CatalogError, CatalogResult, ItemId, ItemPatch};

use crate::backend::RecordStore;
use crate::record::{ItemRecord, NewItemRecord};

/// Ordered in-memory collection behind an `RwLock`. List order is insertion
/// order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<ItemRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store (test fixtures).
    pub fn seeded(records: Vec<ItemRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

fn poisoned(_: impl core::fmt::Debug) -> CatalogError {
    CatalogError::unavailable("lock poisoned")
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create(&self, new: NewItemRecord) -> CatalogResult<ItemRecord> {
        let record = ItemRecord::from_new(ItemId::generate().to_string(), new, Utc::now());
        let mut records = self.records.write().map_err(poisoned)?;
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> CatalogResult<Vec<ItemRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.clone())
    }

    async fn get(&self, id: &ItemId) -> CatalogResult<Option<ItemRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|r| r.id == id.as_str()).cloned())
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> CatalogResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id.as_str())
            .ok_or_else(|| CatalogError::not_found(id.clone()))?;
        record.apply_patch(&patch, Utc::now());
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> CatalogResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        let idx = records
            .iter()
            .position(|r| r.id == id.as_str())
            .ok_or_else(|| CatalogError::not_found(id.clone()))?;
        records.remove(idx);
        Ok(())
    }
}
