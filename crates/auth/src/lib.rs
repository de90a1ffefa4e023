//! `idbazaar-auth` — the admin auth collaborator boundary.
//!
//! Gates the admin-facing mutation UI *upstream* of the catalog store; the
//! store and repository never call this. Intentionally decoupled from the
//! storage layer.

pub mod fixed;
pub mod gate;
pub mod remote;

pub use fixed::FixedAuth;
pub use gate::AdminAuth;
pub use remote::RemoteAuth;
