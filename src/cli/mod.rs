//! CLI argument parsing and command dispatch.

pub mod args;
pub mod config;
pub mod fixtures;
pub mod seed;

pub use args::{Cli, Commands, OutputFormat};
