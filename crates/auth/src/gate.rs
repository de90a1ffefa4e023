//! The auth collaborator interface.

use async_trait::async_trait;

/// Admin session gate.
///
/// `login` answers with a plain bool: a wrong credential and an
/// unreachable auth service both read as "not signed in" to the UI — the
/// distinction is logged, not surfaced.
#[async_trait]
pub trait AdminAuth: Send + Sync {
    /// Whether a valid admin session is currently held.
    fn is_authenticated(&self) -> bool;

    /// Attempt to establish a session.
    async fn login(&self, identity: &str, secret: &str) -> bool;

    /// Drop the session. Safe to call when not signed in.
    fn logout(&self);
}
