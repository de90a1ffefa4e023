//! Fixed-credential gate for dev/tests.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::gate::AdminAuth;

/// Single credential pair held in memory. No token, no expiry.
#[derive(Debug)]
pub struct FixedAuth {
    identity: String,
    secret: String,
    signed_in: RwLock<bool>,
}

impl FixedAuth {
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
            signed_in: RwLock::new(false),
        }
    }
}

#[async_trait]
impl AdminAuth for FixedAuth {
    fn is_authenticated(&self) -> bool {
        self.signed_in.read().map(|s| *s).unwrap_or(false)
    }

    async fn login(&self, identity: &str, secret: &str) -> bool {
        let ok = identity == self.identity && secret == self.secret;
        if let Ok(mut signed_in) = self.signed_in.write() {
            *signed_in = ok;
        }
        ok
    }

    fn logout(&self) {
        if let Ok(mut signed_in) = self.signed_in.write() {
            *signed_in = false;
        }
    }
}
