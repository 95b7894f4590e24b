//! Idempotent product attribute upsert.
//!
//! Attributes are global and must be unique by name, so a second seeding run
//! against the same store would otherwise fail. Existing attributes are looked
//! up by name first and only missing ones are created (with their terms).

use futures::future::try_join_all;
use serde::Deserialize;

use super::batch::{self, BatchResponse, CreateBatch};
use super::references::ResourceRef;
use crate::core::http::WooClient;
use crate::error::Result;
use crate::fixtures::AttributeFixture;

pub const ATTRIBUTES_ENDPOINT: &str = "products/attributes";

/// Endpoint for batch term creation under an attribute.
#[must_use]
pub fn terms_endpoint(attribute_id: u64) -> String {
    format!("{ATTRIBUTES_ENDPOINT}/{attribute_id}/terms/batch")
}

#[derive(Debug, Deserialize)]
struct AttributeResponse {
    id: u64,
    name: String,
}

impl From<AttributeResponse> for ResourceRef {
    fn from(value: AttributeResponse) -> Self {
        Self::new(value.id, value.name)
    }
}

/// List every global attribute on the store.
///
/// # Errors
///
/// Returns error if the request fails.
pub async fn list_attributes(client: &WooClient) -> Result<Vec<ResourceRef>> {
    let attributes: Vec<AttributeResponse> = client.get(ATTRIBUTES_ENDPOINT).await?;
    Ok(attributes.into_iter().map(ResourceRef::from).collect())
}

fn find_by_name(attributes: &[ResourceRef], name: &str) -> Option<ResourceRef> {
    attributes.iter().find(|a| a.name == name).cloned()
}

/// Ensure every fixture attribute exists and return their `{id, name}` pairs
/// in fixture order.
///
/// # Errors
///
/// Returns error if listing fails, or if creating an attribute fails and it
/// still cannot be found afterwards.
pub async fn upsert_attributes(
    client: &WooClient,
    fixture: &[AttributeFixture],
) -> Result<Vec<ResourceRef>> {
    let existing = list_attributes(client).await?;
    let existing = &existing;

    try_join_all(fixture.iter().map(|attribute| async move {
        match find_by_name(existing, &attribute.attribute.name) {
            Some(found) => {
                tracing::debug!(attribute = %found.name, id = found.id, "Reusing existing attribute");
                Ok(found)
            }
            None => create_or_fetch(client, attribute).await,
        }
    }))
    .await
}

/// Create an attribute and its terms. If the create call is rejected, the
/// attribute most likely appeared in the meantime; fetch the list again and
/// resolve with the match instead.
///
/// # Errors
///
/// Returns the create error when the attribute is still absent after the
/// fallback lookup, or the error of the lookup itself.
pub async fn create_or_fetch(client: &WooClient, fixture: &AttributeFixture) -> Result<ResourceRef> {
    match create_with_terms(client, fixture).await {
        Ok(created) => Ok(created),
        Err(create_error) => {
            tracing::info!(
                attribute = %fixture.attribute.name,
                error = %create_error,
                "Attribute create failed, looking it up instead"
            );
            let attributes = list_attributes(client).await?;
            find_by_name(&attributes, &fixture.attribute.name).ok_or(create_error)
        }
    }
}

async fn create_with_terms(client: &WooClient, fixture: &AttributeFixture) -> Result<ResourceRef> {
    let created: AttributeResponse = client
        .post(ATTRIBUTES_ENDPOINT, &fixture.attribute)
        .await?;
    let attribute = ResourceRef::from(created);

    let endpoint = terms_endpoint(attribute.id);
    let response: BatchResponse = client
        .put(
            &endpoint,
            &CreateBatch {
                create: fixture.terms.as_slice(),
            },
        )
        .await?;
    let term_ids = batch::ids_of(&endpoint, response.create)?;
    tracing::debug!(attribute = %attribute.name, terms = term_ids.len(), "Attribute created");

    Ok(attribute)
}
