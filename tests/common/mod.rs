//! Common test utilities for integration tests.
//!
//! # Modules
//!
//! - `logger`: Structured test logging infrastructure
//! - `store`: Mock WooCommerce store built on wiremock

pub mod logger;
pub mod store;
