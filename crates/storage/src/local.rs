//! Local-fallback record store.
//!
//! Persists the whole collection as a single JSON blob at a fixed path —
//! the graceful-degradation path when no remote backend is configured.
//! Functionally equivalent to the remote store from the caller's
//! perspective, with no network failure mode: only a full or corrupted
//! medium, surfaced as `CatalogError::BackendUnavailable`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;

use idbazaar_core::{CatalogError, CatalogResult, ItemId, ItemPatch};

use crate::backend::RecordStore;
use crate::record::{ItemRecord, NewItemRecord};

/// File-backed whole-collection store. Every operation is
/// read-modify-write over the blob; catalogs are small enough that this is
/// fine.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at the default app-data location:
    /// `{app_data_dir}/idbazaar/catalog.json`.
    pub fn at_default_path() -> CatalogResult<Self> {
        Ok(Self::new(default_catalog_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole blob. A missing file is an empty catalog, not an
    /// error; unreadable or unparseable content is a corrupted medium.
    fn read_all(&self) -> CatalogResult<Vec<ItemRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(CatalogError::unavailable(format!(
                    "failed to read catalog file {}: {err}",
                    self.path.display()
                )));
            }
        };
        serde_json::from_str(&raw).map_err(|err| {
            CatalogError::unavailable(format!(
                "corrupted catalog file {}: {err}",
                self.path.display()
            ))
        })
    }

    fn write_all(&self, records: &[ItemRecord]) -> CatalogResult<()> {
        let payload = serde_json::to_string_pretty(records)
            .map_err(|err| CatalogError::unavailable(format!("failed to encode catalog: {err}")))?;
        std::fs::write(&self.path, payload).map_err(|err| {
            CatalogError::unavailable(format!(
                "failed to write catalog file {}: {err}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl RecordStore for LocalStore {
    async fn create(&self, new: NewItemRecord) -> CatalogResult<ItemRecord> {
        let mut records = self.read_all()?;
        let record = ItemRecord::from_new(ItemId::generate().to_string(), new, Utc::now());
        records.push(record.clone());
        self.write_all(&records)?;
        Ok(record)
    }

    async fn list(&self) -> CatalogResult<Vec<ItemRecord>> {
        self.read_all()
    }

    async fn get(&self, id: &ItemId) -> CatalogResult<Option<ItemRecord>> {
        let records = self.read_all()?;
        Ok(records.into_iter().find(|r| r.id == id.as_str()))
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> CatalogResult<()> {
        let mut records = self.read_all()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id.as_str())
            .ok_or_else(|| CatalogError::not_found(id.clone()))?;
        record.apply_patch(&patch, Utc::now());
        self.write_all(&records)
    }

    async fn delete(&self, id: &ItemId) -> CatalogResult<()> {
        let mut records = self.read_all()?;
        let idx = records
            .iter()
            .position(|r| r.id == id.as_str())
            .ok_or_else(|| CatalogError::not_found(id.clone()))?;
        records.remove(idx);
        self.write_all(&records)
    }
}

/// Resolve `{app_data_dir}/idbazaar/catalog.json`, creating the directory.
fn default_catalog_path() -> CatalogResult<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| CatalogError::unavailable("failed to resolve app data directory"))?;

    let mut dir = base;
    dir.push("idbazaar");
    std::fs::create_dir_all(&dir).map_err(|err| {
        CatalogError::unavailable(format!(
            "failed to create data directory {}: {err}",
            dir.display()
        ))
    })?;

    dir.push("catalog.json");
    Ok(dir)
}
