//! Remote record store (PocketBase-style HTTP collection API).
//!
//! Network faults and unexpected statuses surface as
//! `CatalogError::BackendUnavailable`; a 404 on a record operation maps to
//! `CatalogError::NotFound`. No retries here — retry, if desired, is the
//! caller's responsibility.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use idbazaar_core::{CatalogError, CatalogResult, ItemId, ItemPatch};

use crate::backend::RecordStore;
use crate::record::{ItemRecord, NewItemRecord};

/// Collection name the catalog lives in on the remote store.
pub const DEFAULT_COLLECTION: &str = "listings";

// Whole-collection fetch; catalogs are small (no pagination by design).
const LIST_PAGE_SIZE: u32 = 500;

/// HTTP client for a single remote collection.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    token: Option<String>,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
            collection: collection.into(),
            token: None,
        }
    }

    /// Attach an admin token for authenticated mutations.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn records_url(&self) -> String {
        format!(
            "{}/api/collections/{}/records",
            self.base_url, self.collection
        )
    }

    fn record_url(&self, id: &ItemId) -> String {
        format!("{}/{}", self.records_url(), id)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, token.clone()),
            None => req,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    items: Vec<ItemRecord>,
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

fn transport_error(err: reqwest::Error) -> CatalogError {
    CatalogError::unavailable(format!("remote store request failed: {err}"))
}

/// Map a non-success status: 404 on a record operation is `NotFound`,
/// everything else means the backend cannot serve us.
fn status_error(status: StatusCode, id: Option<&ItemId>) -> CatalogError {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => CatalogError::not_found(id.clone()),
        _ => CatalogError::unavailable(format!("remote store returned {status}")),
    }
}

#[async_trait]
impl RecordStore for RemoteStore {
    async fn create(&self, new: NewItemRecord) -> CatalogResult<ItemRecord> {
        let resp = self
            .authorized(self.client.post(self.records_url()))
            .json(&new)
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), None));
        }
        resp.json().await.map_err(transport_error)
    }

    async fn list(&self) -> CatalogResult<Vec<ItemRecord>> {
        let resp = self
            .authorized(self.client.get(self.records_url()))
            .query(&[("perPage", LIST_PAGE_SIZE.to_string())])
            .query(&[("skipTotal", "1")])
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), None));
        }
        let body: ListResponse = resp.json().await.map_err(transport_error)?;
        Ok(body.items)
    }

    async fn get(&self, id: &ItemId) -> CatalogResult<Option<ItemRecord>> {
        let resp = self
            .authorized(self.client.get(self.record_url(id)))
            .send()
            .await
            .map_err(transport_error)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), None));
        }
        let record = resp.json().await.map_err(transport_error)?;
        Ok(Some(record))
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> CatalogResult<()> {
        let resp = self
            .authorized(self.client.patch(self.record_url(id)))
            .json(&patch)
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), Some(id)));
        }
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> CatalogResult<()> {
        let resp = self
            .authorized(self.client.delete(self.record_url(id)))
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), Some(id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_urls_follow_the_collection_api() {
        let store = RemoteStore::new("http://127.0.0.1:8090/", DEFAULT_COLLECTION);
        assert_eq!(
            store.records_url(),
            "http://127.0.0.1:8090/api/collections/listings/records"
        );
        assert_eq!(
            store.record_url(&ItemId::new("abc123")),
            "http://127.0.0.1:8090/api/collections/listings/records/abc123"
        );
    }

    #[test]
    fn not_found_maps_per_operation() {
        let id = ItemId::new("gone");
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, Some(&id)),
            CatalogError::not_found(id)
        );
        // A 404 without a record id (e.g. missing collection) is a backend
        // problem, not a domain one.
        assert!(status_error(StatusCode::NOT_FOUND, None).is_backend_unavailable());
        assert!(status_error(StatusCode::INTERNAL_SERVER_ERROR, Some(&ItemId::new("x")))
            .is_backend_unavailable());
    }

    #[test]
    fn list_response_parses_remote_payloads() {
        let json = serde_json::json!({
            "page": 1,
            "perPage": 500,
            "items": [{
                "id": "rec1",
                "title": "Diamond grinder",
                "description": "",
                "price": 320.0,
                "image": "img",
                "level": 44,
                "skins": ["Joker set"],
                "rank": "Diamond",
                "kd": 2.6,
                "matches": 812,
                "available": true,
                "created": "2025-08-17 09:12:30.123Z",
                "updated": "2025-08-17 09:12:30.123Z"
            }]
        });
        let parsed: ListResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].id, "rec1");
    }
}
