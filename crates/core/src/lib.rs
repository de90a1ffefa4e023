//! `idbazaar-core` — domain foundation for the listing catalog.
//!
//! This crate contains **pure domain** types (no storage or transport
//! concerns): the catalog item, its draft/patch shapes, and the error
//! taxonomy shared by every layer above.

pub mod error;
pub mod item;

pub use error::{CatalogError, CatalogResult};
pub use item::{Item, ItemDraft, ItemId, ItemPatch, Rank};
