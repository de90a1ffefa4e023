//! The catalog store: single owner of the authoritative in-memory
//! collection.
//!
//! Every mutation is confirm-then-apply: the collection is touched only
//! after the backend confirms the write, so any failure path leaves the
//! collection exactly as it was before the call. Operations take
//! `&mut self`; backend calls are the only suspension points.

use tokio::sync::watch;

use idbazaar_core::{CatalogError, CatalogResult, Item, ItemDraft, ItemId, ItemPatch};
use idbazaar_storage::RecordStore;

use crate::repository::CatalogRepository;
use crate::views;

/// Owns `items` (order = backend list order) and the transient budget
/// filter. Consumers read snapshots or subscribe; they never touch the
/// backend directly.
#[derive(Debug)]
pub struct CatalogStore<S: RecordStore> {
    repo: CatalogRepository<S>,
    items: Vec<Item>,
    filter_budget: f64,
    snapshot_tx: watch::Sender<Vec<Item>>,
}

impl<S: RecordStore> CatalogStore<S> {
    pub fn new(backend: S) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Self {
            repo: CatalogRepository::new(backend),
            items: Vec::new(),
            filter_budget: 0.0,
            snapshot_tx,
        }
    }

    /// Replace the collection wholesale from the backend.
    ///
    /// Called once at initialization. On failure the collection is left
    /// empty (fail-open to an empty, rather than stale, catalog) and the
    /// error is surfaced to the initializer; there is no automatic retry.
    pub async fn load(&mut self) -> CatalogResult<()> {
        match self.repo.list_items().await {
            Ok(items) => {
                self.items = items;
                self.publish();
                Ok(())
            }
            Err(err) => {
                self.items = Vec::new();
                self.publish();
                Err(err)
            }
        }
    }

    /// Create a listing. The id is backend-assigned, so the fully-formed
    /// item is appended only once the repository returns it; on failure
    /// the collection is untouched.
    pub async fn add_item(&mut self, draft: ItemDraft) -> CatalogResult<Item> {
        let item = self.repo.add_item(draft).await?;
        tracing::debug!(id = %item.id, title = %item.title, "listing added");
        self.items.push(item.clone());
        self.publish();
        Ok(item)
    }

    /// Partially update a listing, confirm-then-apply.
    ///
    /// The id is checked against the collection before the round trip, so
    /// a stale id fails fast with `NotFound`.
    pub async fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> CatalogResult<()> {
        let idx = self.index_of(id)?;
        self.repo.update_item(id, &patch).await?;
        patch.apply(&mut self.items[idx]);
        tracing::debug!(%id, "listing updated");
        self.publish();
        Ok(())
    }

    /// Remove a listing, confirm-then-apply.
    pub async fn delete_item(&mut self, id: &ItemId) -> CatalogResult<()> {
        let idx = self.index_of(id)?;
        self.repo.delete_item(id).await?;
        self.items.remove(idx);
        tracing::debug!(%id, "listing deleted");
        self.publish();
        Ok(())
    }

    /// Mark a listing sold. Idempotent: selling an already-sold listing
    /// succeeds and changes nothing; a nonexistent id is `NotFound` every
    /// time.
    pub async fn mark_sold(&mut self, id: &ItemId) -> CatalogResult<()> {
        let idx = self.index_of(id)?;
        self.repo.mark_sold(id).await?;
        self.items[idx].available = false;
        tracing::debug!(%id, "listing marked sold");
        self.publish();
        Ok(())
    }

    /// Pure lookup; absent is `None`, not an error.
    pub fn get_by_id(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// The authoritative collection, in backend list order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter_budget(&self) -> f64 {
        self.filter_budget
    }

    /// Pure state transition; no backend interaction. Negative input
    /// clamps to 0 ("no filter").
    pub fn set_filter_budget(&mut self, value: f64) {
        self.filter_budget = if value.is_finite() { value.max(0.0) } else { 0.0 };
    }

    pub fn clear_filter(&mut self) {
        self.filter_budget = 0.0;
    }

    /// The "available and within budget" projection, recomputed on every
    /// read.
    pub fn visible_items(&self) -> Vec<Item> {
        views::visible_items(&self.items, self.filter_budget)
    }

    /// Observe collection snapshots; receivers are notified after `load`
    /// and after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Item>> {
        self.snapshot_tx.subscribe()
    }

    fn index_of(&self, id: &ItemId) -> CatalogResult<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| CatalogError::not_found(id.clone()))
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.items.clone());
    }
}
