//! The storage backend capability trait.

use std::sync::Arc;

use async_trait::async_trait;

use idbazaar_core::{CatalogResult, ItemId, ItemPatch};

use crate::record::{ItemRecord, NewItemRecord};

/// Swappable persistence provider for catalog records.
///
/// Contract (identical across realizations from the caller's perspective):
///
/// - `create` always succeeds with a freshly assigned id unless the medium
///   is unavailable (`CatalogError::BackendUnavailable`).
/// - `update`/`delete` fail with `CatalogError::NotFound` when the id does
///   not exist.
/// - `get` returns `Ok(None)` for an absent id, never an error.
/// - No transactional guarantees are promised across calls.
///
/// Calls are the only suspension points in the layer above; a hung backend
/// call hangs the corresponding store operation. Callers needing
/// responsiveness impose their own timeout at the boundary.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record and return it with the assigned id and
    /// timestamps.
    async fn create(&self, new: NewItemRecord) -> CatalogResult<ItemRecord>;

    /// Fetch the whole collection. Order is backend-defined but stable
    /// between calls.
    async fn list(&self) -> CatalogResult<Vec<ItemRecord>>;

    /// Fetch one record, absent rather than failing when not found.
    async fn get(&self, id: &ItemId) -> CatalogResult<Option<ItemRecord>>;

    /// Apply a partial update to an existing record.
    async fn update(&self, id: &ItemId, patch: ItemPatch) -> CatalogResult<()>;

    /// Remove an existing record.
    async fn delete(&self, id: &ItemId) -> CatalogResult<()>;
}

#[async_trait]
impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    async fn create(&self, new: NewItemRecord) -> CatalogResult<ItemRecord> {
        (**self).create(new).await
    }

    async fn list(&self) -> CatalogResult<Vec<ItemRecord>> {
        (**self).list().await
    }

    async fn get(&self, id: &ItemId) -> CatalogResult<Option<ItemRecord>> {
        (**self).get(id).await
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> CatalogResult<()> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &ItemId) -> CatalogResult<()> {
        (**self).delete(id).await
    }
}
