//! Fixtures command implementation.

use crate::cli::args::FixturesArgs;
use crate::error::Result;

/// Print the payload a fixture group would submit, as pretty JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn execute(args: &FixturesArgs) -> Result<()> {
    let payload = args.group.to_json()?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
