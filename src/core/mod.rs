//! Store client and process-wide plumbing.

pub mod http;
pub mod logging;
