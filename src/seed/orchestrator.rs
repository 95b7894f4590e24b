//! Seeding run executor.
//!
//! Runs the fixture groups in dependency order:
//! 1. independent groups, all in flight together (taxes, coupons, categories,
//!    tags, shipping zones, attributes, payment gateways, and settings when
//!    requested);
//! 2. products, once categories, tags and attributes are known;
//! 3. reviews for every created product, all awaited before returning.
//!
//! A failing group never aborts the run. Every group ends up in the report
//! as succeeded, failed, or skipped when something it needs failed.

use std::future::Future;
use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use tracing::Instrument;

use super::attributes::upsert_attributes;
use super::creators::{
    apply_page_settings, apply_settings, create_categories, create_coupons, create_products,
    create_reviews, create_tags, create_taxes, enable_payment_gateways,
};
use super::references::{CatalogRefs, hydrate_products};
use super::report::{GroupOutcome, SeedReport};
use super::shipping::create_shipping_zones;
use crate::core::http::WooClient;
use crate::error::{Result, SeedError};
use crate::util::time::elapsed_ms;
use crate::fixtures::{
    self, AttributeFixture, Category, Coupon, PaymentGatewayUpdate, ProductFixture, Review,
    Setting, ShippingZoneFixture, Tag, TaxRate,
};

/// Fixture payloads for one run. `Default` uses the built-in fixtures.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub taxes: Vec<TaxRate>,
    pub coupons: Vec<Coupon>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub shipping_zones: Vec<ShippingZoneFixture>,
    pub attributes: Vec<AttributeFixture>,
    pub payment_gateways: Vec<PaymentGatewayUpdate>,
    pub products: Vec<ProductFixture>,
    pub settings: Vec<Setting>,
    /// Builds the reviews for a created product id.
    pub reviews: fn(u64) -> Vec<Review>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            taxes: fixtures::taxes(),
            coupons: fixtures::coupons(),
            categories: fixtures::categories(),
            tags: fixtures::tags(),
            shipping_zones: fixtures::shipping_zones(),
            attributes: fixtures::attributes(),
            payment_gateways: fixtures::payment_gateways(),
            products: fixtures::products(),
            settings: fixtures::settings(),
            reviews: fixtures::reviews_for_product,
        }
    }
}

/// Run options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Also apply store settings and cart/checkout page settings.
    pub with_settings: bool,
}

/// Seed the store with the built-in fixtures.
pub async fn seed(client: &WooClient, options: SeedOptions) -> SeedReport {
    run(client, &Fixtures::default(), options).await
}

/// Seed the store with the given fixtures.
pub async fn run(client: &WooClient, fixtures: &Fixtures, options: SeedOptions) -> SeedReport {
    let started_at = Utc::now();
    let start = Instant::now();
    tracing::info!(base_url = %client.base_url(), with_settings = options.with_settings, "Seeding store");

    let settings_stage = async {
        if options.with_settings {
            let work = async {
                let mut ids = apply_settings(client, &fixtures.settings).await?;
                ids.extend(apply_page_settings(client).await?);
                Ok::<_, SeedError>(ids)
            };
            Some(run_group("settings", work).await.0)
        } else {
            None
        }
    };

    let (taxes, coupons, categories, tags, zones, attributes, gateways, settings) = tokio::join!(
        run_group("taxes", create_taxes(client, &fixtures.taxes)),
        run_group("coupons", create_coupons(client, &fixtures.coupons)),
        run_group("categories", create_categories(client, &fixtures.categories)),
        run_group("tags", create_tags(client, &fixtures.tags)),
        run_group(
            "shipping_zones",
            create_shipping_zones(client, &fixtures.shipping_zones)
        ),
        run_group("attributes", upsert_attributes(client, &fixtures.attributes)),
        run_group(
            "payment_gateways",
            enable_payment_gateways(client, &fixtures.payment_gateways)
        ),
        settings_stage,
    );

    let (categories_outcome, categories) = categories;
    let (tags_outcome, tags) = tags;
    let (attributes_outcome, attributes) = attributes;

    let mut groups = vec![
        taxes.0,
        coupons.0,
        categories_outcome,
        tags_outcome,
        zones.0,
        attributes_outcome,
        gateways.0,
    ];
    groups.extend(settings);

    let product_ids = match (categories, tags, attributes) {
        (Some(categories), Some(tags), Some(attributes)) => {
            let refs = CatalogRefs::new(categories, tags, attributes);
            let work = async {
                let hydrated = hydrate_products(fixtures.products.clone(), &refs)?;
                create_products(client, &hydrated).await
            };
            let (outcome, ids) = run_group("products", work).await;
            groups.push(outcome);
            ids
        }
        _ => {
            let dependency = failed_groups(&groups, &["categories", "tags", "attributes"]);
            let error = SeedError::DependencyFailed {
                stage: "products".to_string(),
                dependency,
            };
            tracing::warn!(error = %error, "Skipping products");
            groups.push(GroupOutcome::skipped("products", &error));
            None
        }
    };

    let product_ids = product_ids.unwrap_or_else(|| {
        let error = SeedError::DependencyFailed {
            stage: "reviews".to_string(),
            dependency: "products".to_string(),
        };
        tracing::warn!(error = %error, "Skipping reviews");
        groups.push(GroupOutcome::skipped("reviews", &error));
        Vec::new()
    });

    let reviews = join_all(product_ids.iter().map(|&product_id| {
        let fixture = (fixtures.reviews)(product_id);
        async move {
            let group = format!("reviews/{product_id}");
            run_group(&group, create_reviews(client, &fixture)).await.0
        }
    }))
    .await;
    groups.extend(reviews);

    let report = SeedReport {
        base_url: client.base_url().to_string(),
        started_at,
        duration_ms: elapsed_ms(start),
        groups,
        product_ids,
    };

    tracing::info!(
        groups = report.groups.len(),
        failed = report.failed_count(),
        duration_ms = report.duration_ms,
        "Seeding finished"
    );
    report
}

fn failed_groups(groups: &[GroupOutcome], names: &[&str]) -> String {
    groups
        .iter()
        .filter(|g| names.contains(&g.group.as_str()) && !g.is_success())
        .map(|g| g.group.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run one fixture group, timing it and converting its result into an outcome.
async fn run_group<T, F>(group: &str, work: F) -> (GroupOutcome, Option<Vec<T>>)
where
    F: Future<Output = Result<Vec<T>>>,
{
    let started_at = Utc::now();
    let start = Instant::now();
    tracing::debug!(group, "Starting fixture group");

    let result = work.instrument(tracing::info_span!("group", name = group)).await;
    let duration_ms = elapsed_ms(start);

    match result {
        Ok(items) => {
            tracing::info!(group, items = items.len(), duration_ms, "Fixture group created");
            let outcome = GroupOutcome::succeeded(group, items.len(), started_at, duration_ms);
            (outcome, Some(items))
        }
        Err(e) => {
            tracing::warn!(group, error = %e, duration_ms, "Fixture group failed");
            (GroupOutcome::failed(group, &e, started_at, duration_ms), None)
        }
    }
}
