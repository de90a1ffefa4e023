//! Catalog error model.

use thiserror::Error;

use crate::item::ItemId;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure taxonomy shared by the storage backends, the repository and the
/// store.
///
/// Backends raise `BackendUnavailable`/`NotFound`; the layers above re-raise
/// them unchanged rather than catching and swallowing. `Validation` is
/// raised before any backend call is made.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The active storage medium could not be reached or written.
    #[error("storage backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The operation targeted an id absent from the collection or backend.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// The caller supplied a malformed draft or patch.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::BackendUnavailable(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True when retrying against a healthy backend could succeed.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_))
    }
}
