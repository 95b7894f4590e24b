//! woo-seed - WooCommerce end-to-end fixture seeding
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use woo_seed::cli::{Cli, Commands};
use woo_seed::core::logging;
use woo_seed::storage::ResolvedConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(logging::parse_log_level_from_env)
        .unwrap_or_default()
        .with_verbose(cli.verbose);
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    let log_ansi = logging::ansi_enabled(cli.no_color, log_file.is_some());
    logging::init(log_level, log_format, log_file, log_ansi);

    let format = cli.effective_format();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("{}", woo_seed::render::error::render_error(&e, format, pretty));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> woo_seed::Result<()> {
    let format = cli.effective_format();
    let pretty = cli.pretty;
    let no_color = !woo_seed::util::env::should_use_color(cli.no_color);

    match &cli.command {
        Some(Commands::Fixtures(args)) => woo_seed::cli::fixtures::execute(args),

        Some(Commands::Config) => {
            let config = ResolvedConfig::resolve(&cli)?;
            woo_seed::cli::config::execute(&config, format, pretty)
        }

        // Seeding is the default command
        Some(Commands::Seed(args)) => {
            let config = ResolvedConfig::resolve(&cli)?;
            woo_seed::cli::seed::execute(args, &config, format, pretty, no_color).await
        }
        None => {
            let config = ResolvedConfig::resolve(&cli)?;
            let args = woo_seed::cli::args::SeedArgs::default();
            woo_seed::cli::seed::execute(&args, &config, format, pretty, no_color).await
        }
    }
}
