//! Single-request creators for the batch-backed fixture groups.
//!
//! Each creator returns only what later stages need (ids, or `{id, name}`
//! pairs for groups products refer to), never the raw response.

use futures::future::try_join_all;
use serde::Deserialize;

use super::batch::{self, BatchItem};
use super::references::{HydratedProduct, ResourceRef};
use crate::core::http::WooClient;
use crate::error::{Result, SeedError};
use crate::fixtures::{
    Category, Coupon, Page, PaymentGatewayUpdate, Review, Setting, Tag, TaxRate, page_settings,
};

pub const TAXES_BATCH: &str = "taxes/batch";
pub const COUPONS_BATCH: &str = "coupons/batch";
pub const CATEGORIES_BATCH: &str = "products/categories/batch";
pub const TAGS_BATCH: &str = "products/tags/batch";
pub const PRODUCTS_BATCH: &str = "products/batch";
pub const REVIEWS_BATCH: &str = "products/reviews/batch";
pub const GENERAL_SETTINGS_BATCH: &str = "settings/general/batch";
pub const ADVANCED_SETTINGS_BATCH: &str = "settings/advanced/batch";

/// Page listing used to locate the cart and checkout pages.
pub const PAGES_ENDPOINT: &str = "pages?per_page=100";

/// Create tax rates.
///
/// # Errors
///
/// Returns error if the request fails or a rate is rejected.
pub async fn create_taxes(client: &WooClient, fixture: &[TaxRate]) -> Result<Vec<u64>> {
    batch::create_ids(client, TAXES_BATCH, fixture).await
}

/// Create coupons.
///
/// # Errors
///
/// Returns error if the request fails or a coupon is rejected.
pub async fn create_coupons(client: &WooClient, fixture: &[Coupon]) -> Result<Vec<u64>> {
    batch::create_ids(client, COUPONS_BATCH, fixture).await
}

/// Create product categories.
///
/// A category that already exists is reused.
///
/// # Errors
///
/// Returns error if the request fails or a category is rejected.
pub async fn create_categories(
    client: &WooClient,
    fixture: &[Category],
) -> Result<Vec<ResourceRef>> {
    let created = batch::submit_create(client, CATEGORIES_BATCH, fixture).await?;
    let names: Vec<&str> = fixture.iter().map(|c| c.name.as_str()).collect();
    term_refs(CATEGORIES_BATCH, &names, created)
}

/// Create product tags.
///
/// A tag that already exists is reused.
///
/// # Errors
///
/// Returns error if the request fails or a tag is rejected.
pub async fn create_tags(client: &WooClient, fixture: &[Tag]) -> Result<Vec<ResourceRef>> {
    let created = batch::submit_create(client, TAGS_BATCH, fixture).await?;
    let names: Vec<&str> = fixture.iter().map(|t| t.name.as_str()).collect();
    term_refs(TAGS_BATCH, &names, created)
}

/// Turn a term batch response into `{id, name}` pairs.
///
/// Refs are always named after the fixture at the same position, since the
/// store echoes names HTML-escaped (`&` as `&amp;`). Items rejected as
/// `term_exists` resolve to the existing term.
fn term_refs(endpoint: &str, names: &[&str], items: Vec<BatchItem>) -> Result<Vec<ResourceRef>> {
    if items.len() != names.len() {
        return Err(SeedError::ParseResponse(format!(
            "{endpoint}: expected {} items, got {}",
            names.len(),
            items.len()
        )));
    }

    items
        .into_iter()
        .zip(names)
        .map(|(item, &fixture_name)| {
            if let Some(error) = item.error {
                return match error.existing_term_id() {
                    Some(id) => {
                        tracing::debug!(endpoint, name = fixture_name, id, "Term already exists");
                        Ok(ResourceRef::new(id, fixture_name))
                    }
                    None => Err(batch::reject(endpoint, error)),
                };
            }
            let id = item.id.ok_or_else(|| {
                SeedError::ParseResponse(format!("{endpoint}: batch item without id"))
            })?;
            Ok(ResourceRef::new(id, fixture_name))
        })
        .collect()
}

/// Create hydrated products.
///
/// # Errors
///
/// Returns error if the request fails or a product is rejected.
pub async fn create_products(client: &WooClient, products: &[HydratedProduct]) -> Result<Vec<u64>> {
    batch::create_ids(client, PRODUCTS_BATCH, products).await
}

/// Create reviews for one product.
///
/// # Errors
///
/// Returns error if the request fails or a review is rejected.
pub async fn create_reviews(client: &WooClient, fixture: &[Review]) -> Result<Vec<u64>> {
    batch::create_ids(client, REVIEWS_BATCH, fixture).await
}

#[derive(Debug, Deserialize)]
struct GatewayResponse {
    id: String,
    #[serde(default)]
    enabled: bool,
}

/// Enable payment gateways, one request per gateway, all in flight together.
///
/// # Errors
///
/// Returns the first failure among the gateway updates.
pub async fn enable_payment_gateways(
    client: &WooClient,
    gateways: &[PaymentGatewayUpdate],
) -> Result<Vec<String>> {
    let updates = gateways.iter().map(|gateway| async move {
        let endpoint = format!("payment_gateways/{}", gateway.id);
        let response: GatewayResponse = client.post(&endpoint, gateway).await?;
        if !response.enabled {
            tracing::warn!(gateway = %response.id, "Gateway still reported as disabled");
        }
        Ok::<_, SeedError>(response.id)
    });

    try_join_all(updates).await
}

/// Apply general store settings.
///
/// # Errors
///
/// Returns error if the request fails or a setting is rejected.
pub async fn apply_settings(client: &WooClient, settings: &[Setting]) -> Result<Vec<String>> {
    batch::update_ids(client, GENERAL_SETTINGS_BATCH, settings).await
}

/// Point the cart and checkout page settings at the store's block pages.
///
/// # Errors
///
/// Returns error if listing pages or updating the settings fails.
pub async fn apply_page_settings(client: &WooClient) -> Result<Vec<String>> {
    let pages: Vec<Page> = client.get_wp(PAGES_ENDPOINT).await?;
    let settings = page_settings(&pages);
    for setting in &settings {
        tracing::debug!(setting = %setting.id, value = ?setting.value, "Resolved page setting");
    }
    batch::update_ids(client, ADVANCED_SETTINGS_BATCH, &settings).await
}
