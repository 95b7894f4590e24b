//! woo-seed - WooCommerce end-to-end fixture seeding
//!
//! Creates taxes, coupons, catalog data, shipping zones, payment gateway
//! settings, products and reviews on a WooCommerce store over its REST API.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod fixtures;
pub mod render;
pub mod seed;
pub mod storage;
pub mod util;

pub use error::{ExitCode, Result, SeedError};
