//! Config command implementation.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::render;
use crate::storage::ResolvedConfig;

/// Print the resolved configuration and where each value came from.
///
/// # Errors
///
/// Returns error if rendering fails.
pub fn execute(config: &ResolvedConfig, format: OutputFormat, pretty: bool) -> Result<()> {
    let output = render::render_config(config, format, pretty)?;
    print!("{output}");
    Ok(())
}
