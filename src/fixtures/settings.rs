//! Store setting fixtures, applied through the settings batch endpoints.

use serde::{Deserialize, Serialize};

/// Setting option update (`{id, value}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub id: String,
    pub value: SettingValue,
}

/// Setting values are either a plain string or a list (multi-select options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Text(String),
    List(Vec<String>),
}

/// WordPress page as returned by `wp/v2/pages`; only the fields we match on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub id: u64,
    pub slug: String,
}

fn text(id: &str, value: &str) -> Setting {
    Setting {
        id: id.to_string(),
        value: SettingValue::Text(value.to_string()),
    }
}

fn list(id: &str, values: &[&str]) -> Setting {
    Setting {
        id: id.to_string(),
        value: SettingValue::List(values.iter().map(|v| (*v).to_string()).collect()),
    }
}

const SELLING_COUNTRIES: [&str; 6] = ["DZ", "CA", "NZ", "ES", "GB", "US"];

/// Default general store settings.
#[must_use]
pub fn settings() -> Vec<Setting> {
    vec![
        text("woocommerce_store_address", "60 29th Street #343"),
        text("woocommerce_store_city", "San Francisco"),
        text("woocommerce_store_country", "US:CA"),
        text("woocommerce_store_postcode", "94110"),
        text("woocommerce_allowed_countries", "specific"),
        list("woocommerce_specific_allowed_countries", &SELLING_COUNTRIES),
        text("woocommerce_ship_to_countries", "specific"),
        list("woocommerce_specific_ship_to_countries", &SELLING_COUNTRIES),
        text("woocommerce_enable_coupons", "yes"),
        text("woocommerce_calc_taxes", "yes"),
        text("woocommerce_currency", "USD"),
    ]
}

/// Cart and checkout page settings derived from the store's pages.
///
/// The first page whose slug contains `cart-block` (resp. `checkout-block`)
/// wins. When no page matches, the value is an empty string.
#[must_use]
pub fn page_settings(pages: &[Page]) -> Vec<Setting> {
    let page_id = |needle: &str| {
        pages
            .iter()
            .find(|page| page.slug.contains(needle))
            .map(|page| page.id.to_string())
            .unwrap_or_default()
    };

    vec![
        text("woocommerce_cart_page_id", &page_id("cart-block")),
        text("woocommerce_checkout_page_id", &page_id("checkout-block")),
    ]
}
