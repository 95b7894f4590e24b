//! Shipping zone creation.
//!
//! Locations and methods hang off a zone id, so each zone is created first;
//! its locations and methods then go out together.

use futures::future::try_join_all;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::core::http::WooClient;
use crate::error::Result;
use crate::fixtures::ShippingZoneFixture;

pub const ZONES_ENDPOINT: &str = "shipping/zones";

#[derive(Debug, Serialize)]
struct NewZone<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ZoneResponse {
    id: u64,
}

/// Endpoint for a zone's locations.
#[must_use]
pub fn locations_endpoint(zone_id: u64) -> String {
    format!("{ZONES_ENDPOINT}/{zone_id}/locations")
}

/// Endpoint for a zone's methods.
#[must_use]
pub fn methods_endpoint(zone_id: u64) -> String {
    format!("{ZONES_ENDPOINT}/{zone_id}/methods")
}

/// Create all zones concurrently and return their ids in fixture order.
///
/// # Errors
///
/// Returns the first failure of any zone, location or method request.
pub async fn create_shipping_zones(
    client: &WooClient,
    zones: &[ShippingZoneFixture],
) -> Result<Vec<u64>> {
    try_join_all(zones.iter().map(|zone| create_zone(client, zone))).await
}

/// Create one zone, then attach its locations and methods.
///
/// Resolves only once the locations update and every method have completed.
///
/// # Errors
///
/// Returns the first failure among the zone's requests.
pub async fn create_zone(client: &WooClient, zone: &ShippingZoneFixture) -> Result<u64> {
    let created: ZoneResponse = client
        .post(ZONES_ENDPOINT, &NewZone { name: &zone.name })
        .await?;
    let zone_id = created.id;
    tracing::debug!(zone = %zone.name, zone_id, "Shipping zone created");

    let locations_endpoint = locations_endpoint(zone_id);
    let methods_endpoint = methods_endpoint(zone_id);

    let locations = client.put::<_, IgnoredAny>(&locations_endpoint, zone.locations.as_slice());
    let methods = try_join_all(
        zone.methods
            .iter()
            .map(|method| client.post::<_, IgnoredAny>(&methods_endpoint, method)),
    );

    tokio::try_join!(locations, methods)?;
    Ok(zone_id)
}
