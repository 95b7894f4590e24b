//! Configuration storage.

pub mod config;
pub mod paths;

pub use config::{
    Config, ConfigSource, ConfigSources, ENV_API_VERSION, ENV_CONFIG, ENV_PASSWORD, ENV_TIMEOUT,
    ENV_URL, ENV_USERNAME, ResolvedConfig,
};
pub use paths::AppPaths;
