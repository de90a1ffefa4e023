//! Remote admin auth (PocketBase-style `auth-with-password`).

use std::sync::RwLock;

use async_trait::async_trait;
use serde::Deserialize;

use crate::gate::AdminAuth;

/// Client for the remote auth endpoint; holds the session token
/// in-process.
#[derive(Debug)]
pub struct RemoteAuth {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

impl RemoteAuth {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: RwLock::new(None),
        }
    }

    /// The session token, if a login succeeded. Handed to the storage
    /// layer for authenticated mutations.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn auth_url(&self) -> String {
        format!("{}/api/admins/auth-with-password", self.base_url)
    }
}

#[async_trait]
impl AdminAuth for RemoteAuth {
    fn is_authenticated(&self) -> bool {
        self.token.read().map(|t| t.is_some()).unwrap_or(false)
    }

    async fn login(&self, identity: &str, secret: &str) -> bool {
        let resp = self
            .client
            .post(self.auth_url())
            .json(&serde_json::json!({ "identity": identity, "password": secret }))
            .send()
            .await;

        let resp = match resp {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                tracing::debug!(status = %resp.status(), "admin login rejected");
                return false;
            }
            Err(err) => {
                tracing::warn!(error = %err, "auth service unreachable");
                return false;
            }
        };

        match resp.json::<AuthResponse>().await {
            Ok(body) => {
                if let Ok(mut token) = self.token.write() {
                    *token = Some(body.token);
                }
                tracing::debug!(identity, "admin login succeeded");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "malformed auth response");
                false
            }
        }
    }

    fn logout(&self) {
        if let Ok(mut token) = self.token.write() {
            *token = None;
        }
    }
}
