//! HTTP client utilities.
//!
//! Provides the shared WooCommerce REST client used by every creator.

use std::time::{Duration, Instant};

use reqwest::{Client, ClientBuilder, Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedError};
use crate::util::time::elapsed_ms;

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default WooCommerce REST namespace.
pub const DEFAULT_API_VERSION: &str = "wc/v3";

/// WordPress core REST namespace (pages, posts).
pub const WP_NAMESPACE: &str = "wp/v2";

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("woo-seed/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SeedError::Network(e.to_string()))
}

/// Basic-auth credentials for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// WooCommerce error body (`{"code": "...", "message": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// REST client bound to one store, namespace and credential set.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WooClient {
    http: Client,
    base_url: Url,
    api_version: String,
    credentials: Credentials,
    timeout: Duration,
}

impl WooClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8889`).
    ///
    /// # Errors
    ///
    /// Returns error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_version: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            SeedError::ConfigInvalid {
                key: "url".to_string(),
                value: base_url.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            http: build_client(timeout)?,
            base_url,
            api_version: api_version.trim_matches('/').to_string(),
            credentials,
            timeout,
        })
    }

    /// Base URL of the store.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for an endpoint in the WooCommerce namespace.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        self.namespaced_url(&self.api_version, endpoint)
    }

    fn namespaced_url(&self, namespace: &str, endpoint: &str) -> String {
        format!(
            "{}/wp-json/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            namespace,
            endpoint.trim_start_matches('/')
        )
    }

    /// `GET {namespace}/{endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, non-success status, or parse failure.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.send::<(), T>(Method::GET, &self.api_version, endpoint, None)
            .await
    }

    /// `GET wp/v2/{endpoint}` against the WordPress core namespace.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, non-success status, or parse failure.
    pub async fn get_wp<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.send::<(), T>(Method::GET, WP_NAMESPACE, endpoint, None)
            .await
    }

    /// `POST {namespace}/{endpoint}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, non-success status, or parse failure.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, &self.api_version, endpoint, Some(body))
            .await
    }

    /// `PUT {namespace}/{endpoint}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, non-success status, or parse failure.
    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, &self.api_version, endpoint, Some(body))
            .await
    }

    async fn send<B, T>(
        &self,
        method: Method,
        namespace: &str,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.namespaced_url(namespace, endpoint);
        tracing::debug!(%method, endpoint, "Sending request");
        let start = Instant::now();

        let mut request = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SeedError::Timeout(self.timeout.as_secs())
            } else {
                SeedError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let elapsed = elapsed_ms(start);
        tracing::debug!(%method, endpoint, status = status.as_u16(), elapsed_ms = elapsed, "Response received");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let parsed: Option<ErrorBody> = serde_json::from_str(&text).ok();
            let (code, message) = match parsed {
                Some(ErrorBody { code, message }) => (code, message.unwrap_or(text)),
                None => (None, text),
            };
            return Err(SeedError::Api {
                method: method.to_string(),
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                code,
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SeedError::ParseResponse(format!("{method} {endpoint}: {e}")))
    }
}
