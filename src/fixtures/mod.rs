//! Default fixture payloads.
//!
//! Every provider is a plain function that builds a fresh `Vec` on each call,
//! so callers may mutate what they get back without affecting later runs.
//! Records serialize to exactly the request shape the WooCommerce REST API
//! (`wc/v3`) expects; optional fields are omitted rather than sent as `null`.
//!
//! See <https://woocommerce.github.io/woocommerce-rest-api-docs/>.

pub mod catalog;
pub mod commerce;
pub mod settings;
pub mod shipping;

pub use catalog::{
    AttributeFixture, AttributeSpec, AttributeTerm, Category, Download, Image,
    ProductAttributeFixture, ProductFixture, Review, Tag, attributes, categories, products,
    reviews_for_product, tags,
};
pub use commerce::{
    Coupon, GatewaySettings, PaymentGatewayUpdate, TaxRate, coupons, payment_gateways, taxes,
};
pub use settings::{Page, Setting, SettingValue, page_settings, settings};
pub use shipping::{
    MethodSettings, ShippingMethod, ShippingZoneFixture, ZoneLocation, shipping_zones,
};

use serde::Serialize;

/// Fixture groups that can be printed with `woo-seed fixtures <group>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FixtureGroup {
    Taxes,
    Coupons,
    Categories,
    Tags,
    Attributes,
    Products,
    Reviews,
    Settings,
    Shipping,
    PaymentGateways,
}

impl FixtureGroup {
    /// Serialize the default fixture for this group.
    ///
    /// Reviews are rendered for a placeholder product id of `0`.
    pub fn to_json(self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Taxes => to_value(&taxes()),
            Self::Coupons => to_value(&coupons()),
            Self::Categories => to_value(&categories()),
            Self::Tags => to_value(&tags()),
            Self::Attributes => to_value(&attributes()),
            Self::Products => to_value(&products()),
            Self::Reviews => to_value(&reviews_for_product(0)),
            Self::Settings => to_value(&settings()),
            Self::Shipping => to_value(&shipping_zones()),
            Self::PaymentGateways => to_value(&payment_gateways()),
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn every_group_serializes_to_a_non_empty_array() {
        for group in FixtureGroup::value_variants() {
            let value = group.to_json().unwrap();
            let items = value.as_array().unwrap();
            assert!(!items.is_empty(), "{group:?} should not be empty");
        }
    }

    #[test]
    fn providers_return_independent_sequences() {
        let mut first = products();
        let second = products();
        assert_eq!(first, second);

        first[0].name.push_str(" (edited)");
        first[0].categories.clear();
        assert_ne!(first, second);
        assert_eq!(second, products());

        let mut zones = shipping_zones();
        zones[0].methods.clear();
        assert_eq!(shipping_zones()[0].methods.len(), 2);

        let mut rates = taxes();
        rates.pop();
        assert_eq!(taxes().len(), 3);
    }
}
