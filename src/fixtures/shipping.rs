//! Shipping zone fixtures.
//!
//! A zone is created first; its locations and methods are attached afterwards
//! through the zone's sub-resources.

use serde::Serialize;

/// Shipping zone with the locations and methods to attach to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingZoneFixture {
    pub name: String,
    pub locations: Vec<ZoneLocation>,
    pub methods: Vec<ShippingMethod>,
}

/// Zone location (`PUT shipping/zones/{id}/locations` takes an array of these).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneLocation {
    pub code: String,
}

/// Shipping method included in a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingMethod {
    pub method_id: String,
    pub settings: MethodSettings,
}

/// Method instance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSettings {
    pub title: String,
    pub cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
}

/// Default shipping zones: UK and US, each with flat rate and free shipping.
///
/// Free shipping in the UK requires a coupon.
#[must_use]
pub fn shipping_zones() -> Vec<ShippingZoneFixture> {
    vec![zone("UK", Some("coupon")), zone("US", None)]
}

fn zone(code: &str, free_shipping_requires: Option<&str>) -> ShippingZoneFixture {
    ShippingZoneFixture {
        name: code.to_string(),
        locations: vec![ZoneLocation {
            code: code.to_string(),
        }],
        methods: vec![
            ShippingMethod {
                method_id: "flat_rate".to_string(),
                settings: MethodSettings {
                    title: "Normal Shipping".to_string(),
                    cost: "20.00".to_string(),
                    requires: None,
                },
            },
            ShippingMethod {
                method_id: "free_shipping".to_string(),
                settings: MethodSettings {
                    title: "Free Shipping".to_string(),
                    cost: "00.00".to_string(),
                    requires: free_shipping_requires.map(str::to_string),
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uk_free_shipping_requires_coupon() {
        let zones = shipping_zones();
        assert_eq!(zones[0].name, "UK");
        assert_eq!(
            serde_json::to_value(&zones[0].methods[1]).unwrap(),
            json!({
                "method_id": "free_shipping",
                "settings": { "title": "Free Shipping", "cost": "00.00", "requires": "coupon" }
            })
        );
        assert!(zones[1].methods[1].settings.requires.is_none());
    }

    #[test]
    fn zone_location_matches_zone_name() {
        for zone in shipping_zones() {
            assert_eq!(zone.locations.len(), 1);
            assert_eq!(zone.locations[0].code, zone.name);
        }
    }
}
