//! Translation layer between stored records and domain items.

use chrono::Utc;

use idbazaar_core::{CatalogResult, Item, ItemDraft, ItemId, ItemPatch};
use idbazaar_storage::{ItemRecord, NewItemRecord, RecordStore};

/// Image used when a draft does not bring its own.
///
/// Default-filling is a repository policy, not a UI concern: whatever
/// backend is active, a created record always has a displayable image.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=400&h=300&fit=crop";

/// Thin, typed wrapper over the active [`RecordStore`].
///
/// Maps record ↔ item shapes, fills defaults, validates input before any
/// backend call, and re-raises backend errors unchanged — it never
/// catches-and-swallows.
#[derive(Debug, Clone)]
pub struct CatalogRepository<S> {
    backend: S,
}

impl<S: RecordStore> CatalogRepository<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Validate and persist a draft; the returned item carries the
    /// backend-assigned id and creation timestamp.
    pub async fn add_item(&self, draft: ItemDraft) -> CatalogResult<Item> {
        draft.validate()?;
        let record = self.backend.create(draft_to_record(draft)).await?;
        Ok(record_to_item(record))
    }

    pub async fn list_items(&self) -> CatalogResult<Vec<Item>> {
        let records = self.backend.list().await?;
        Ok(records.into_iter().map(record_to_item).collect())
    }

    pub async fn get_item(&self, id: &ItemId) -> CatalogResult<Option<Item>> {
        Ok(self.backend.get(id).await?.map(record_to_item))
    }

    pub async fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> CatalogResult<()> {
        patch.validate()?;
        self.backend.update(id, patch.clone()).await
    }

    pub async fn delete_item(&self, id: &ItemId) -> CatalogResult<()> {
        self.backend.delete(id).await
    }

    pub async fn mark_sold(&self, id: &ItemId) -> CatalogResult<()> {
        self.backend.update(id, ItemPatch::sold()).await
    }
}

fn draft_to_record(draft: ItemDraft) -> NewItemRecord {
    NewItemRecord {
        title: draft.title,
        description: draft.description,
        price: draft.price,
        image: draft
            .image
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        level: draft.level,
        skins: draft.skins,
        rank: draft.rank,
        kd: draft.kd,
        matches: draft.matches,
        available: draft.available,
    }
}

fn record_to_item(record: ItemRecord) -> Item {
    // Backends always stamp `created`; fall back to "now" only for records
    // predating timestamp support.
    let created_at = if record.created.timestamp() == 0 {
        Utc::now()
    } else {
        record.created
    };
    Item {
        id: ItemId::new(record.id),
        title: record.title,
        description: record.description,
        price: record.price,
        image: record.image,
        level: record.level,
        skins: record.skins,
        rank: record.rank,
        kd: record.kd,
        matches: record.matches,
        available: record.available,
        created_at,
    }
}
