//! Mock WooCommerce store for integration tests.
#![allow(dead_code)]
//!
//! Batch endpoints echo their `create`/`update` items back with fresh ids,
//! so fixture changes never require touching canned responses.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::{Map, Value, json};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use woo_seed::core::http::{Credentials, DEFAULT_API_VERSION, WooClient};

/// Prefix of every WooCommerce endpoint path.
pub const WC: &str = "/wp-json/wc/v3";

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password";

/// Hands out increasing ids shared by every responder of one store.
#[derive(Clone)]
pub struct IdSequence(Arc<AtomicU64>);

impl IdSequence {
    fn new() -> Self {
        Self(Arc::new(AtomicU64::new(100)))
    }

    fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

fn body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap_or(Value::Null)
}

/// Echoes `{"create": [..]}` as created items and `{"update": [..]}` as
/// updated items.
pub struct BatchEcho(IdSequence);

impl Respond for BatchEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = body(request);
        let mut response = Map::new();

        if let Some(items) = body["create"].as_array() {
            let created = items
                .iter()
                .map(|item| json!({ "id": self.0.next(), "name": item.get("name") }))
                .collect();
            response.insert("create".to_string(), Value::Array(created));
        }
        if let Some(items) = body["update"].as_array() {
            let updated = items
                .iter()
                .map(|item| json!({ "id": item["id"], "value": item["value"] }))
                .collect();
            response.insert("update".to_string(), Value::Array(updated));
        }

        ResponseTemplate::new(200).set_body_json(Value::Object(response))
    }
}

/// Echoes a single created resource: `{"id": <new>, "name": <request name>}`.
pub struct CreateEcho(IdSequence);

impl Respond for CreateEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = body(request);
        ResponseTemplate::new(201).set_body_json(json!({ "id": self.0.next(), "name": body["name"] }))
    }
}

/// Answers a gateway update with the gateway id taken from the path.
struct GatewayEcho;

impl Respond for GatewayEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request.url.path().rsplit('/').next().unwrap_or_default();
        ResponseTemplate::new(200).set_body_json(json!({ "id": id, "enabled": true }))
    }
}

pub struct MockStore {
    pub server: MockServer,
    pub ids: IdSequence,
}

impl MockStore {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            ids: IdSequence::new(),
        }
    }

    pub fn client(&self) -> WooClient {
        WooClient::new(
            &self.server.uri(),
            DEFAULT_API_VERSION,
            Credentials {
                username: USERNAME.to_string(),
                password: PASSWORD.to_string(),
            },
            Duration::from_secs(5),
        )
        .expect("client build")
    }

    pub fn batch_echo(&self) -> BatchEcho {
        BatchEcho(self.ids.clone())
    }

    pub fn create_echo(&self) -> CreateEcho {
        CreateEcho(self.ids.clone())
    }

    /// Mount a batch endpoint (`{WC}/{endpoint}`) that echoes its items.
    pub async fn mount_batch(&self, endpoint: &str) {
        Mock::given(method("POST"))
            .and(path(format!("{WC}/{endpoint}")))
            .respond_with(self.batch_echo())
            .expect(1..)
            .named(endpoint)
            .mount(&self.server)
            .await;
    }

    /// Mount the attribute list, returning the given existing attributes.
    /// The list must be fetched at least once.
    pub async fn mount_attribute_list(&self, existing: Value) {
        Mock::given(method("GET"))
            .and(path(format!("{WC}/products/attributes")))
            .respond_with(ResponseTemplate::new(200).set_body_json(existing))
            .expect(1..)
            .named("list attributes")
            .mount(&self.server)
            .await;
    }

    /// Mount attribute creation and term batches, each expected at least once.
    pub async fn mount_attribute_create(&self) {
        Mock::given(method("POST"))
            .and(path(format!("{WC}/products/attributes")))
            .respond_with(self.create_echo())
            .expect(1..)
            .named("create attribute")
            .mount(&self.server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(format!(r"^{WC}/products/attributes/\d+/terms/batch$")))
            .respond_with(self.batch_echo())
            .expect(1..)
            .named("attribute terms")
            .mount(&self.server)
            .await;
    }

    /// Mount zone creation plus zone locations and methods.
    pub async fn mount_shipping(&self) {
        Mock::given(method("POST"))
            .and(path(format!("{WC}/shipping/zones")))
            .respond_with(self.create_echo())
            .expect(1..)
            .named("create zone")
            .mount(&self.server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(format!(r"^{WC}/shipping/zones/\d+/locations$")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1..)
            .named("zone locations")
            .mount(&self.server)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(format!(r"^{WC}/shipping/zones/\d+/methods$")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .expect(1..)
            .named("zone methods")
            .mount(&self.server)
            .await;
    }

    pub async fn mount_payment_gateways(&self) {
        Mock::given(method("POST"))
            .and(path_regex(format!(r"^{WC}/payment_gateways/\w+$")))
            .respond_with(GatewayEcho)
            .expect(3)
            .named("payment gateways")
            .mount(&self.server)
            .await;
    }

    /// Mount the settings batches and the WordPress pages listing.
    pub async fn mount_settings(&self) {
        self.mount_batch("settings/general/batch").await;
        self.mount_batch("settings/advanced/batch").await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/pages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 5, "slug": "shop" },
                { "id": 7, "slug": "cart-block" },
                { "id": 9, "slug": "checkout-block" }
            ])))
            .expect(1)
            .named("pages")
            .mount(&self.server)
            .await;
    }

    /// Mount every endpoint a default run touches, each answering success.
    pub async fn mount_all(&self) {
        self.mount_all_except(&[]).await;
    }

    /// Like [`Self::mount_all`], leaving out the listed batch endpoints so a
    /// test can mount its own responses for them.
    pub async fn mount_all_except(&self, skip: &[&str]) {
        for endpoint in [
            "taxes/batch",
            "coupons/batch",
            "products/categories/batch",
            "products/tags/batch",
            "products/batch",
            "products/reviews/batch",
        ] {
            if !skip.contains(&endpoint) {
                self.mount_batch(endpoint).await;
            }
        }
        self.mount_attribute_list(json!([])).await;
        self.mount_attribute_create().await;
        self.mount_shipping().await;
        self.mount_payment_gateways().await;
    }

    /// Mount an endpoint that must never be called.
    pub async fn forbid(&self, http_method: &str, endpoint: &str) {
        Mock::given(method(http_method))
            .and(path(format!("{WC}/{endpoint}")))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .named(endpoint)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far, as `METHOD path` strings in arrival order.
    pub async fn request_log(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect()
    }

    /// Distinct `METHOD path` pairs received, with numeric path segments
    /// replaced by `{id}`.
    pub async fn endpoints_hit(&self) -> BTreeSet<String> {
        self.request_log()
            .await
            .iter()
            .map(|line| {
                line.split('/')
                    .map(|segment| {
                        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                            "{id}"
                        } else {
                            segment
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .collect()
    }

    /// Parsed JSON bodies of every request sent to `path`.
    pub async fn bodies(&self, path: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == path)
            .map(body)
            .collect()
    }
}
