//! Batch endpoint request/response shapes.
//!
//! WooCommerce batch endpoints answer `200` even when individual items fail;
//! rejected items carry an `error` object in place of the resource. Those are
//! surfaced here instead of being counted as created.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::http::WooClient;
use crate::error::{Result, SeedError};

/// `{"create": [...]}` request body.
#[derive(Debug, Serialize)]
pub struct CreateBatch<'a, T> {
    pub create: &'a [T],
}

/// `{"update": [...]}` request body.
#[derive(Debug, Serialize)]
pub struct UpdateBatch<'a, T> {
    pub update: &'a [T],
}

/// Batch response. `I` is the resource id type (numeric for most resources,
/// string for setting options).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "I: DeserializeOwned"))]
pub struct BatchResponse<I = u64> {
    #[serde(default = "Vec::new")]
    pub create: Vec<BatchItem<I>>,
    #[serde(default = "Vec::new")]
    pub update: Vec<BatchItem<I>>,
}

/// One item of a batch response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "I: DeserializeOwned"))]
pub struct BatchItem<I = u64> {
    pub id: Option<I>,
    #[serde(default)]
    pub error: Option<BatchItemError>,
}

/// Per-item error reported inside a batch response.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchItemError {
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<BatchErrorData>,
}

/// Extra data attached to an item error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchErrorData {
    /// Id of the existing resource, reported with `term_exists`.
    #[serde(default)]
    pub resource_id: Option<u64>,
}

impl BatchItemError {
    /// Id of an already existing term, when the item was rejected as a duplicate.
    #[must_use]
    pub fn existing_term_id(&self) -> Option<u64> {
        if self.code == "term_exists" {
            self.data.as_ref().and_then(|data| data.resource_id)
        } else {
            None
        }
    }

    fn into_error(self, endpoint: &str) -> SeedError {
        SeedError::BatchItemRejected {
            endpoint: endpoint.to_string(),
            code: self.code,
            message: self.message,
        }
    }
}

/// Submit `{"create": items}` and return the raw response items.
///
/// # Errors
///
/// Returns error if the request fails.
pub async fn submit_create<T: Serialize>(
    client: &WooClient,
    endpoint: &str,
    items: &[T],
) -> Result<Vec<BatchItem>> {
    let response: BatchResponse = client
        .post(endpoint, &CreateBatch { create: items })
        .await?;
    Ok(response.create)
}

/// Submit `{"create": items}` and return the ids of the created resources.
///
/// # Errors
///
/// Returns error if the request fails or any item was rejected.
pub async fn create_ids<T: Serialize>(
    client: &WooClient,
    endpoint: &str,
    items: &[T],
) -> Result<Vec<u64>> {
    let created = submit_create(client, endpoint, items).await?;
    ids_of(endpoint, created)
}

/// Ids of batch items, failing on the first rejected item.
///
/// # Errors
///
/// Returns [`SeedError::BatchItemRejected`] for a rejected item and
/// [`SeedError::ParseResponse`] for an item without an id.
pub fn ids_of<I>(endpoint: &str, items: Vec<BatchItem<I>>) -> Result<Vec<I>> {
    items
        .into_iter()
        .map(|item| match (item.error, item.id) {
            (Some(error), _) => Err(error.into_error(endpoint)),
            (None, Some(id)) => Ok(id),
            (None, None) => Err(SeedError::ParseResponse(format!(
                "{endpoint}: batch item without id"
            ))),
        })
        .collect()
}

/// Submit `{"update": items}` and return the ids of the updated resources.
///
/// # Errors
///
/// Returns error if the request fails or any item was rejected.
pub async fn update_ids<T, I>(client: &WooClient, endpoint: &str, items: &[T]) -> Result<Vec<I>>
where
    T: Serialize,
    I: DeserializeOwned,
{
    let response: BatchResponse<I> = client
        .post(endpoint, &UpdateBatch { update: items })
        .await?;
    ids_of(endpoint, response.update)
}

pub(crate) fn reject(endpoint: &str, error: BatchItemError) -> SeedError {
    error.into_error(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_body_wraps_items() {
        let items = [json!({ "name": "Music" })];
        let body = serde_json::to_value(CreateBatch { create: &items }).unwrap();
        assert_eq!(body, json!({ "create": [{ "name": "Music" }] }));
    }

    #[test]
    fn rejected_item_becomes_error() {
        let response: BatchResponse = serde_json::from_value(json!({
            "create": [
                { "id": 11, "name": "Music" },
                { "id": 0, "error": { "code": "woocommerce_rest_invalid_coupon", "message": "bad", "data": { "status": 400 } } }
            ]
        }))
        .unwrap();

        let err = ids_of("coupons/batch", response.create).unwrap_err();
        assert!(matches!(
            err,
            SeedError::BatchItemRejected { ref code, .. } if code == "woocommerce_rest_invalid_coupon"
        ));
    }

    #[test]
    fn string_ids_for_settings() {
        let response: BatchResponse<String> = serde_json::from_value(json!({
            "update": [{ "id": "woocommerce_currency", "value": "USD" }]
        }))
        .unwrap();
        assert!(response.create.is_empty());
        assert_eq!(
            ids_of("settings/general/batch", response.update).unwrap(),
            vec!["woocommerce_currency".to_string()]
        );
    }

    #[test]
    fn term_exists_exposes_resource_id() {
        let item: BatchItem = serde_json::from_value(json!({
            "id": 0,
            "error": {
                "code": "term_exists",
                "message": "A term with the name provided already exists.",
                "data": { "status": 400, "resource_id": 15 }
            }
        }))
        .unwrap();
        assert_eq!(item.error.unwrap().existing_term_id(), Some(15));
    }
}
