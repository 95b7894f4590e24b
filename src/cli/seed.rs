//! Seed command implementation.

use crate::cli::args::{OutputFormat, SeedArgs};
use crate::core::http::WooClient;
use crate::error::Result;
use crate::render;
use crate::seed::{SeedOptions, seed};
use crate::storage::ResolvedConfig;

/// Execute the seed command.
///
/// The report is printed even when groups fail; the command then returns
/// [`crate::SeedError::PartialFailure`].
///
/// # Errors
///
/// Returns error if the client cannot be built, rendering fails, or any
/// fixture group did not succeed.
pub async fn execute(
    args: &SeedArgs,
    config: &ResolvedConfig,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<()> {
    let client = WooClient::new(
        &config.url,
        &config.api_version,
        config.credentials.clone(),
        config.timeout,
    )?;

    tracing::debug!(
        url = %config.url,
        api_version = %config.api_version,
        timeout_secs = config.timeout.as_secs(),
        "Starting seed"
    );

    let options = SeedOptions {
        with_settings: args.with_settings,
    };
    let report = seed(&client, options).await;

    let output = render::render_report(&report, format, pretty, no_color)?;
    println!("{output}");

    report.into_result().map(|_| ())
}
