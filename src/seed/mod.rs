//! Store seeding: creators for each fixture group and the run executor.

pub mod attributes;
pub mod batch;
pub mod creators;
pub mod orchestrator;
pub mod references;
pub mod report;
pub mod shipping;

pub use attributes::{create_or_fetch, list_attributes, upsert_attributes};
pub use creators::{
    apply_page_settings, apply_settings, create_categories, create_coupons, create_products,
    create_reviews, create_tags, create_taxes, enable_payment_gateways,
};
pub use orchestrator::{Fixtures, SeedOptions, run, seed};
pub use references::{
    CatalogRefs, HydratedAttribute, HydratedProduct, ReferenceIndex, ResourceRef,
    hydrate_product, hydrate_products,
};
pub use report::{GroupOutcome, GroupStatus, SeedReport};
pub use shipping::{create_shipping_zones, create_zone};
