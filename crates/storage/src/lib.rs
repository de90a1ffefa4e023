//! `idbazaar-storage` — swappable persistence for the listing catalog.
//!
//! One capability trait ([`RecordStore`]) with three realizations:
//!
//! - [`RemoteStore`]: PocketBase-style HTTP record store (production).
//! - [`LocalStore`]: whole-collection JSON blob on disk (graceful
//!   degradation when no remote is configured).
//! - [`InMemoryStore`]: tests/dev.
//!
//! The layers above depend only on the trait; which realization is active is
//! decided once at process start via [`BackendConfig`].

pub mod backend;
pub mod config;
pub mod in_memory;
pub mod local;
pub mod record;
pub mod remote;

pub use backend::RecordStore;
pub use config::BackendConfig;
pub use in_memory::InMemoryStore;
pub use local::LocalStore;
pub use record::{ItemRecord, NewItemRecord};
pub use remote::RemoteStore;
