//! Configuration file loading and resolution.
//!
//! Loads configuration from:
//! - Linux: `~/.config/woo-seed/config.toml`
//! - macOS: `~/Library/Application Support/com.woocommerce.woo-seed/config.toml`
//! - Windows: `%APPDATA%/woocommerce/woo-seed/config/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `WOO_SEED_URL`: Store base URL
//! - `WOO_SEED_USERNAME` / `WOO_SEED_PASSWORD`: Basic-auth credentials
//! - `WOO_SEED_API_VERSION`: REST namespace (e.g. `wc/v3`)
//! - `WOO_SEED_TIMEOUT`: Request timeout in seconds
//! - `WOO_SEED_CONFIG`: Override config file path

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::Cli;
use crate::core::http::{Credentials, DEFAULT_API_VERSION};
use crate::error::{Result, SeedError};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable for the store base URL.
pub const ENV_URL: &str = "WOO_SEED_URL";
/// Environment variable for the basic-auth username.
pub const ENV_USERNAME: &str = "WOO_SEED_USERNAME";
/// Environment variable for the basic-auth password.
pub const ENV_PASSWORD: &str = "WOO_SEED_PASSWORD";
/// Environment variable for the REST namespace.
pub const ENV_API_VERSION: &str = "WOO_SEED_API_VERSION";
/// Environment variable for timeout in seconds.
pub const ENV_TIMEOUT: &str = "WOO_SEED_TIMEOUT";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "WOO_SEED_CONFIG";

const DEFAULT_URL: &str = "http://localhost:8889";
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MAX_TIMEOUT_SECONDS: u64 = 300;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Store base URL.
    pub url: String,
    /// Basic-auth credentials.
    pub credentials: Credentials,
    /// REST namespace.
    pub api_version: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Config file that was consulted (it may not exist).
    pub config_path: PathBuf,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    pub url: ConfigSource,
    pub username: ConfigSource,
    pub password: ConfigSource,
    pub api_version: ConfigSource,
    pub timeout: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, process environment, and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but is invalid
    /// - Any resolved value is invalid (e.g., malformed URL)
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// Resolve using a custom environment lookup.
    ///
    /// # Errors
    ///
    /// See [`ResolvedConfig::resolve`].
    pub fn resolve_with(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let config_path = cli
            .config
            .clone()
            .or_else(|| env(ENV_CONFIG).map(PathBuf::from))
            .unwrap_or_else(|| AppPaths::new().config_file());
        let config = Config::load_from(&config_path)?;
        config.validate()?;

        let mut sources = ConfigSources::default();

        let url = pick(
            cli.url.clone(),
            env(ENV_URL),
            config.store.url.clone(),
            DEFAULT_URL.to_string(),
            &mut sources.url,
        );
        let username = pick(
            cli.username.clone(),
            env(ENV_USERNAME),
            config.store.username.clone(),
            DEFAULT_USERNAME.to_string(),
            &mut sources.username,
        );
        let password = pick(
            cli.password.clone(),
            env(ENV_PASSWORD),
            config.store.password.clone(),
            DEFAULT_PASSWORD.to_string(),
            &mut sources.password,
        );
        let api_version = pick(
            cli.api_version.clone(),
            env(ENV_API_VERSION),
            config.store.api_version.clone(),
            DEFAULT_API_VERSION.to_string(),
            &mut sources.api_version,
        );
        let timeout_env = env(ENV_TIMEOUT)
            .map(|raw| parse_timeout(&raw, ENV_TIMEOUT))
            .transpose()?;
        let timeout_seconds = pick(
            cli.timeout,
            timeout_env,
            config.general.timeout_seconds,
            DEFAULT_TIMEOUT_SECONDS,
            &mut sources.timeout,
        );

        validate_url(&url)?;
        validate_timeout(timeout_seconds)?;
        if api_version.trim_matches('/').is_empty() {
            return Err(SeedError::ConfigInvalid {
                key: "api_version".to_string(),
                value: api_version,
                message: "REST namespace must not be empty".to_string(),
            });
        }

        Ok(Self {
            url,
            credentials: Credentials { username, password },
            api_version,
            timeout: Duration::from_secs(timeout_seconds),
            config_path,
            sources,
        })
    }
}

/// Take the first present value in precedence order, recording where it came from.
fn pick<T>(
    cli: Option<T>,
    env: Option<T>,
    file: Option<T>,
    default: T,
    source: &mut ConfigSource,
) -> T {
    let candidates = [
        (cli, ConfigSource::Cli),
        (env, ConfigSource::Env),
        (file, ConfigSource::ConfigFile),
    ];
    for (value, from) in candidates {
        if let Some(value) = value {
            *source = from;
            return value;
        }
    }
    *source = ConfigSource::Default;
    default
}

fn parse_timeout(raw: &str, key: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| SeedError::ConfigInvalid {
        key: key.to_string(),
        value: raw.to_string(),
        message: "expected a number of seconds".to_string(),
    })
}

fn validate_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 || seconds > MAX_TIMEOUT_SECONDS {
        return Err(SeedError::ConfigInvalid {
            key: "timeout".to_string(),
            value: seconds.to_string(),
            message: format!("Timeout must be between 1 and {MAX_TIMEOUT_SECONDS} seconds"),
        });
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<()> {
    let invalid = |message: String| SeedError::ConfigInvalid {
        key: "url".to_string(),
        value: url.to_string(),
        message,
    };
    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme \"{}\", expected http or https",
            parsed.scheme()
        )));
    }
    Ok(())
}

/// Application configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Target store.
    pub store: StoreConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Timeout for network requests in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Target store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL, e.g. `http://localhost:8889`.
    pub url: Option<String>,
    /// Basic-auth username.
    pub username: Option<String>,
    /// Basic-auth password.
    pub password: Option<String>,
    /// REST namespace, e.g. `wc/v3`.
    pub api_version: Option<String>,
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    /// Returns error only if the file exists but is invalid.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SeedError::Config(format!("Invalid config file {}: {e}", path.display())))
    }

    /// Validate values that can be checked without the other layers.
    ///
    /// # Errors
    ///
    /// Returns error on an out-of-range timeout or malformed URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(seconds) = self.general.timeout_seconds {
            validate_timeout(seconds)?;
        }
        if let Some(url) = &self.store.url {
            validate_url(url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("woo-seed").chain(args.iter().copied()))
    }

    fn no_file() -> [&'static str; 2] {
        ["--config", "/nonexistent/woo-seed/config.toml"]
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_target_local_test_store() {
        let resolved = ResolvedConfig::resolve_with(&cli(&no_file()), env_from(&[])).unwrap();
        assert_eq!(resolved.url, "http://localhost:8889");
        assert_eq!(resolved.credentials.username, "admin");
        assert_eq!(resolved.credentials.password, "password");
        assert_eq!(resolved.api_version, "wc/v3");
        assert_eq!(resolved.timeout, Duration::from_secs(30));
        assert_eq!(resolved.sources.url, ConfigSource::Default);
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[general]
timeout_seconds = 45

[store]
url = "http://file.test"
username = "file-user"
password = "file-pass"
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let resolved = ResolvedConfig::resolve_with(
            &cli(&["--config", path, "--url", "http://cli.test"]),
            env_from(&[(ENV_URL, "http://env.test"), (ENV_USERNAME, "env-user")]),
        )
        .unwrap();

        assert_eq!(resolved.url, "http://cli.test");
        assert_eq!(resolved.sources.url, ConfigSource::Cli);
        assert_eq!(resolved.credentials.username, "env-user");
        assert_eq!(resolved.sources.username, ConfigSource::Env);
        assert_eq!(resolved.credentials.password, "file-pass");
        assert_eq!(resolved.sources.password, ConfigSource::ConfigFile);
        assert_eq!(resolved.timeout, Duration::from_secs(45));
        assert_eq!(resolved.sources.timeout, ConfigSource::ConfigFile);
    }

    #[test]
    fn config_path_from_env() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[store]\napi_version = \"wc/v2\"").unwrap();
        let path = file.path().to_str().unwrap();

        let resolved = ResolvedConfig::resolve_with(&cli(&[]), env_from(&[(ENV_CONFIG, path)]))
            .unwrap();
        assert_eq!(resolved.api_version, "wc/v2");
        assert_eq!(resolved.config_path, file.path());
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let resolved =
            ResolvedConfig::resolve_with(&cli(&no_file()), env_from(&[(ENV_URL, "  ")])).unwrap();
        assert_eq!(resolved.sources.url, ConfigSource::Default);
    }

    #[test]
    fn invalid_timeout_env_is_rejected() {
        let err = ResolvedConfig::resolve_with(
            &cli(&no_file()),
            env_from(&[(ENV_TIMEOUT, "soon")]),
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::ConfigInvalid { ref key, .. } if key == ENV_TIMEOUT));
    }

    #[test]
    fn timeout_out_of_range_is_rejected() {
        let mut args = no_file().to_vec();
        args.extend(["--timeout", "0"]);
        let err = ResolvedConfig::resolve_with(&cli(&args), env_from(&[])).unwrap_err();
        assert!(err.to_string().contains("Timeout must be between"));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let mut args = no_file().to_vec();
        args.extend(["--url", "ftp://store.test"]);
        let err = ResolvedConfig::resolve_with(&cli(&args), env_from(&[])).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(SeedError::Config(_))));
    }

    #[test]
    fn load_missing_file_returns_default() {
        let config = Config::load_from(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(config.store.url.is_none());
        assert!(config.validate().is_ok());
    }
}
