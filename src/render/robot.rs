//! Robot-mode output (JSON).

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::mask_secret;
use crate::error::Result;
use crate::seed::SeedReport;
use crate::storage::{ConfigSources, ResolvedConfig};

/// Schema version of the JSON envelope.
pub const SCHEMA_VERSION: &str = "woo-seed.v1";

/// Stable JSON envelope around command output.
#[derive(Debug, Serialize)]
pub struct RobotOutput<T> {
    pub schema_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub command: String,
    pub data: T,
    pub errors: Vec<String>,
}

impl<T> RobotOutput<T> {
    /// Create a new robot output envelope.
    pub fn new(command: impl Into<String>, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            command: command.into(),
            data,
            errors: Vec::new(),
        }
    }
}

/// Render any serializable value as JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_json<T: Serialize>(output: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(json)
}

/// Render a seeding report as JSON. Failed group errors are repeated in `errors`.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_report(report: &SeedReport, pretty: bool) -> Result<String> {
    let mut output = RobotOutput::new("seed", report);
    output.errors = report
        .groups
        .iter()
        .filter_map(|g| g.error.as_ref().map(|e| format!("{}: {e}", g.group)))
        .collect();
    render_json(&output, pretty)
}

#[derive(Debug, Serialize)]
struct ConfigView<'a> {
    url: &'a str,
    username: &'a str,
    password: String,
    api_version: &'a str,
    timeout_seconds: u64,
    config_path: String,
    sources: &'a ConfigSources,
}

/// Render the resolved configuration as JSON, with the password masked.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_config(config: &ResolvedConfig, pretty: bool) -> Result<String> {
    let view = ConfigView {
        url: &config.url,
        username: &config.credentials.username,
        password: mask_secret(&config.credentials.password),
        api_version: &config.api_version,
        timeout_seconds: config.timeout.as_secs(),
        config_path: config.config_path.display().to_string(),
        sources: &config.sources,
    };
    render_json(&RobotOutput::new("config", view), pretty)
}
