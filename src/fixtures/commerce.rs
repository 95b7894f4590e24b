//! Checkout-side fixtures: tax rates, coupons and payment gateways.

use serde::Serialize;

/// Tax rate, created through `taxes/batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxRate {
    pub country: String,
    pub rate: String,
    pub name: String,
    pub shipping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Coupon, created through `coupons/batch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coupon {
    pub code: String,
    pub discount_type: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_expires: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_use: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping: Option<bool>,
}

/// Update for one payment gateway (`POST payment_gateways/{id}`).
///
/// `id` addresses the endpoint and is not part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentGatewayUpdate {
    #[serde(skip)]
    pub id: String,
    pub description: String,
    pub enabled: bool,
    pub settings: GatewaySettings,
}

/// Gateway-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewaySettings {
    pub instructions: String,
}

/// Default tax rates.
#[must_use]
pub fn taxes() -> Vec<TaxRate> {
    vec![
        tax("US", "5.0000", "State Tax", Some(1)),
        tax("US", "10.000", "Sale Tax", Some(2)),
        tax("UK", "20.000", "VAT", None),
    ]
}

fn tax(country: &str, rate: &str, name: &str, priority: Option<u32>) -> TaxRate {
    TaxRate {
        country: country.to_string(),
        rate: rate.to_string(),
        name: name.to_string(),
        shipping: false,
        priority,
    }
}

/// Default coupons.
#[must_use]
pub fn coupons() -> Vec<Coupon> {
    vec![
        coupon("coupon", "fixed_cart", "5"),
        Coupon {
            date_expires: Some("2020-01-01".to_string()),
            ..coupon("oldcoupon", "fixed_cart", "5")
        },
        Coupon {
            maximum_amount: Some("100.00".to_string()),
            ..coupon("below100", "percent", "20")
        },
        Coupon {
            minimum_amount: Some("50.00".to_string()),
            ..coupon("above50", "percent", "20")
        },
        Coupon {
            individual_use: Some(true),
            email_restrictions: Some("*@automattic.com%2C *@a8c.com".to_string()),
            ..coupon("a12s", "percent", "100")
        },
        Coupon {
            free_shipping: Some(true),
            ..coupon("freeshipping", "percent", "0")
        },
    ]
}

fn coupon(code: &str, discount_type: &str, amount: &str) -> Coupon {
    Coupon {
        code: code.to_string(),
        discount_type: discount_type.to_string(),
        amount: amount.to_string(),
        ..Coupon::default()
    }
}

/// Offline payment gateways to enable: cash on delivery, bank transfer, cheque.
#[must_use]
pub fn payment_gateways() -> Vec<PaymentGatewayUpdate> {
    [
        ("cod", "Cash on delivery"),
        ("bacs", "Direct bank transfer"),
        ("cheque", "Check payments"),
    ]
    .into_iter()
    .map(|(id, label)| PaymentGatewayUpdate {
        id: id.to_string(),
        description: label.to_string(),
        enabled: true,
        settings: GatewaySettings {
            instructions: label.to_string(),
        },
    })
    .collect()
}
