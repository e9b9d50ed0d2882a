//! Configuration System
//!
//! Layered configuration: built-in defaults, then a global file (or an
//! explicit file given on the command line), then `DIRPRINT__*` environment
//! overrides such as `DIRPRINT__WATCH__INTERVAL_SECS=10`. List values are
//! comma-separated: `DIRPRINT__WATCH__EXCLUDE=/a,/b`.

use crate::error::ApiError;
use crate::logging::{self, LoggingConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirprintConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Polling settings for `dirprint watch`
    #[serde(default)]
    pub watch: WatchSettings,
}

/// Polling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSettings {
    /// Seconds between captures
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Subpaths always excluded from captures
    #[serde(default)]
    pub exclude: Vec<PathBuf>,
}

fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL_SECS
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            exclude: Vec::new(),
        }
    }
}

impl DirprintConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.watch.interval_secs == 0 {
            return Err(ApiError::ConfigError(
                "watch.interval_secs must be greater than zero".to_string(),
            ));
        }
        logging::validate_format(&self.logging.format)?;
        Ok(())
    }
}

/// Path to the global config file: `<XDG config dir>/dirprint/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dirprint")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Create a builder with defaults applied
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("watch.interval_secs", DEFAULT_INTERVAL_SECS)?
        .set_default("logging.level", "warn")
}

/// `DIRPRINT__*` overrides, read from the process environment unless `source` is given
fn environment(source: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("DIRPRINT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("watch.exclude")
        .source(source)
}

/// Loads [`DirprintConfig`] from its sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file if present, and environment overrides
    pub fn load() -> Result<DirprintConfig, ApiError> {
        let mut builder = builder_with_defaults()?;
        if let Some(path) = global_config_path() {
            if path.exists() {
                debug!(config_path = %path.display(), "Using global config file");
                builder = builder.add_source(File::from(path).required(false));
            }
        }
        Self::finish(builder.add_source(environment(None)))
    }

    /// Load defaults, the given file (which must exist), and environment overrides
    pub fn load_from_file(path: &Path) -> Result<DirprintConfig, ApiError> {
        let builder = builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(environment(None));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<DirprintConfig, ApiError> {
        let config: DirprintConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
