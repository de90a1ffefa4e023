//! `idbazaar-catalog` — the inventory state layer.
//!
//! [`CatalogRepository`] translates between stored records and domain
//! items; [`CatalogStore`] owns the authoritative in-memory collection and
//! mediates every mutation through the repository with confirm-then-apply
//! discipline; [`views`] derives the filtered projection consumers render.

pub mod contact;
pub mod repository;
pub mod store;
pub mod views;

pub use repository::CatalogRepository;
pub use store::CatalogStore;
pub use views::visible_items;
