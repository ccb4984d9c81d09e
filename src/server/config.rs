//! Layered configuration for the taskboard server.
//!
//! Sources in priority order (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attributes, plus `RUST_LOG` for
//!    the log filter when `TASKBOARD_LOG` is unset)
//! 3. TOML config file (`<config dir>/taskboard/config.toml`)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
const DEFAULT_POOL_SIZE: u32 = 8;
/// Log filter used when no source configures one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The connection pool must hold at least one connection.
    #[error("database pool size must be at least 1")]
    InvalidPoolSize,
}

/// Top-level TOML document; every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    server: ServerSection,
    database: DatabaseSection,
    logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ServerSection {
    bind_addr: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DatabaseSection {
    url: Option<String>,
    pool_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LoggingSection {
    level: Option<String>,
}

/// Command-line arguments for the taskboard server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Task board GraphQL server")]
pub struct TaskboardCliArgs {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TASKBOARD_ADDR")]
    pub bind: Option<String>,

    /// Path to the config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// `PostgreSQL` connection URL; tasks are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long)]
    pub pool_size: Option<u32>,

    /// Log filter directive (trace, debug, info, warn, error).
    #[arg(long, env = "TASKBOARD_LOG")]
    pub log_level: Option<String>,

    /// Standard `RUST_LOG` filter; ranks below `--log-level`.
    #[arg(skip = std::env::var("RUST_LOG").ok())]
    pub rust_log: Option<String>,
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskboardConfig {
    /// Socket address to listen on.
    pub bind_addr: String,
    /// `PostgreSQL` URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Connection pool size.
    pub pool_size: u32,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl TaskboardConfig {
    /// Loads configuration from CLI arguments, the environment and a TOML
    /// file.
    ///
    /// An explicit `--config` path must exist. Without one, the default path
    /// is tried and a missing file counts as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or the
    /// resolved pool size is zero.
    pub fn load(cli: &TaskboardCliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, file)
    }

    /// Merges CLI values over file values over defaults.
    fn resolve(cli: &TaskboardCliArgs, file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let pool_size = cli
            .pool_size
            .or(file.database.pool_size)
            .unwrap_or(defaults.pool_size);
        if pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }

        Ok(Self {
            bind_addr: cli
                .bind
                .clone()
                .or(file.server.bind_addr)
                .unwrap_or(defaults.bind_addr),
            database_url: cli
                .database_url
                .clone()
                .or(file.database.url)
                .filter(|url| !url.trim().is_empty()),
            pool_size,
            log_level: cli
                .log_level
                .clone()
                .or_else(|| cli.rust_log.clone())
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
        })
    }
}

fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ConfigFile::default());
    };
    let path = config_dir.join("taskboard").join("config.toml");
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
