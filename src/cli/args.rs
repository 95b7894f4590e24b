//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::fixtures::FixtureGroup;

/// Seed a WooCommerce store with end-to-end test fixtures.
#[derive(Parser, Debug)]
#[command(name = "woo-seed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Store connection ===
    /// Store base URL (e.g. http://localhost:8889)
    #[arg(long, value_name = "URL", global = true)]
    pub url: Option<String>,

    /// Basic-auth username
    #[arg(long, value_name = "USER", global = true)]
    pub username: Option<String>,

    /// Basic-auth password
    #[arg(long, value_name = "PASSWORD", global = true)]
    pub password: Option<String>,

    /// WooCommerce REST namespace
    #[arg(long, value_name = "NAMESPACE", global = true)]
    pub api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Config file path
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    // === Output flags ===
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective output format.
    #[must_use]
    pub const fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create all fixtures on the store (default command)
    Seed(SeedArgs),

    /// Print the default payload of a fixture group
    Fixtures(FixturesArgs),

    /// Show the resolved store configuration
    Config,
}

/// Arguments for the `seed` command.
#[derive(Parser, Debug, Default)]
pub struct SeedArgs {
    /// Also apply store settings and cart/checkout page settings
    #[arg(long)]
    pub with_settings: bool,
}

/// Arguments for the `fixtures` command.
#[derive(Parser, Debug)]
pub struct FixturesArgs {
    /// Fixture group to print
    #[arg(value_enum)]
    pub group: FixtureGroup,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn json_flag_overrides_format() {
        let cli = Cli::parse_from(["woo-seed", "--json", "seed"]);
        assert_eq!(cli.effective_format(), OutputFormat::Json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "woo-seed",
            "seed",
            "--with-settings",
            "--url",
            "http://store.test",
        ]);
        assert_eq!(cli.url.as_deref(), Some("http://store.test"));
        assert!(matches!(
            cli.command,
            Some(Commands::Seed(SeedArgs { with_settings: true }))
        ));
    }

    #[test]
    fn fixture_group_uses_kebab_case() {
        let cli = Cli::parse_from(["woo-seed", "fixtures", "payment-gateways"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Fixtures(FixturesArgs {
                group: FixtureGroup::PaymentGateways
            }))
        ));
    }
}
