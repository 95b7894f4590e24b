//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::seed::SeedReport;
use crate::storage::ResolvedConfig;

/// Render a seeding report.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render_report(
    report: &SeedReport,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_report(report, no_color)),
        OutputFormat::Json => robot::render_report(report, pretty),
    }
}

/// Render the resolved configuration.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render_config(config: &ResolvedConfig, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_config(config)),
        OutputFormat::Json => robot::render_config(config, pretty),
    }
}

/// Placeholder shown instead of secrets.
pub const MASKED: &str = "********";

/// Mask a secret for display. Empty secrets stay empty.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        MASKED.to_string()
    }
}
