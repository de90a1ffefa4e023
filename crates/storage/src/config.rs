//! Backend selection, decided once at process start.

use std::path::PathBuf;
use std::sync::Arc;

use idbazaar_core::CatalogResult;

use crate::backend::RecordStore;
use crate::local::LocalStore;
use crate::remote::{self, RemoteStore};

/// Which storage backend a deployment runs against.
///
/// Environment variables:
/// - `IDBAZAAR_REMOTE_URL` — base URL of the remote store; when set, the
///   remote backend is selected.
/// - `IDBAZAAR_COLLECTION` — remote collection name (default `listings`).
/// - `IDBAZAAR_ADMIN_TOKEN` — optional token for authenticated mutations.
/// - `IDBAZAAR_DATA_PATH` — local catalog file path; default is the
///   app-data location.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendConfig {
    Remote {
        base_url: String,
        collection: String,
        token: Option<String>,
    },
    Local {
        path: Option<PathBuf>,
    },
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("IDBAZAAR_REMOTE_URL").ok(),
            std::env::var("IDBAZAAR_COLLECTION").ok(),
            std::env::var("IDBAZAAR_ADMIN_TOKEN").ok(),
            std::env::var("IDBAZAAR_DATA_PATH").ok(),
        )
    }

    fn from_vars(
        remote_url: Option<String>,
        collection: Option<String>,
        token: Option<String>,
        data_path: Option<String>,
    ) -> Self {
        match remote_url {
            Some(base_url) if !base_url.trim().is_empty() => Self::Remote {
                base_url,
                collection: collection.unwrap_or_else(|| remote::DEFAULT_COLLECTION.to_string()),
                token,
            },
            _ => Self::Local {
                path: data_path.map(PathBuf::from),
            },
        }
    }

    /// Construct the selected backend. The result is the only
    /// `RecordStore` the process should hold; layers above stay agnostic
    /// to which realization is behind the `Arc`.
    pub fn connect(&self) -> CatalogResult<Arc<dyn RecordStore>> {
        match self {
            Self::Remote {
                base_url,
                collection,
                token,
            } => {
                let mut store = RemoteStore::new(base_url.clone(), collection.clone());
                if let Some(token) = token {
                    store = store.with_token(token.clone());
                }
                tracing::info!(base_url, collection, "using remote catalog backend");
                Ok(Arc::new(store))
            }
            Self::Local { path } => {
                let store = match path {
                    Some(path) => LocalStore::new(path.clone()),
                    None => LocalStore::at_default_path()?,
                };
                tracing::info!(path = %store.path().display(), "using local catalog backend");
                Ok(Arc::new(store))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_url_selects_the_remote_backend() {
        let cfg = BackendConfig::from_vars(
            Some("http://127.0.0.1:8090".to_string()),
            None,
            None,
            None,
        );
        assert_eq!(
            cfg,
            BackendConfig::Remote {
                base_url: "http://127.0.0.1:8090".to_string(),
                collection: "listings".to_string(),
                token: None,
            }
        );
    }

    #[test]
    fn blank_remote_url_falls_back_to_local() {
        let cfg = BackendConfig::from_vars(Some("  ".to_string()), None, None, None);
        assert_eq!(cfg, BackendConfig::Local { path: None });
    }

    #[test]
    fn explicit_data_path_is_honoured() {
        let cfg = BackendConfig::from_vars(None, None, None, Some("/tmp/cat.json".to_string()));
        assert_eq!(
            cfg,
            BackendConfig::Local {
                path: Some(PathBuf::from("/tmp/cat.json")),
            }
        );
        let store = cfg.connect().unwrap();
        // Agnostic handle; just make sure it is usable as a trait object.
        let _: &dyn RecordStore = store.as_ref();
    }

    #[test]
    fn collection_override_applies() {
        let cfg = BackendConfig::from_vars(
            Some("http://h".to_string()),
            Some("accounts".to_string()),
            Some("tok".to_string()),
            None,
        );
        match cfg {
            BackendConfig::Remote {
                collection, token, ..
            } => {
                assert_eq!(collection, "accounts");
                assert_eq!(token.as_deref(), Some("tok"));
            }
            other => panic!("expected remote config, got {other:?}"),
        }
    }
}
