//! Utility modules.

pub mod env;
pub mod time;
