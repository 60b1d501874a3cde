//! Bootstrap configuration loading
//!
//! Every setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`CGP_*`)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: the service starts on defaults.
//! A TOML file that exists but cannot be read or parsed is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit TOML config file
pub const ENV_CONFIG: &str = "CGP_CONFIG";
/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "CGP_HOST";
/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "CGP_PORT";
/// Environment variable overriding the simulated processing delay (milliseconds)
pub const ENV_PROCESSING_DELAY_MS: &str = "CGP_PROCESSING_DELAY_MS";
/// Environment variable overriding the default log level
pub const ENV_LOG_LEVEL: &str = "CGP_LOG_LEVEL";

/// Compiled-in defaults used when no other source provides a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub processing_delay_ms: u64,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn new() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            processing_delay_ms: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self::new()
    }
}

/// TOML bootstrap file contents
///
/// All keys are optional; absent keys fall through to compiled defaults.
///
/// ```toml
/// host = "0.0.0.0"
/// port = 8080
/// processing_delay_ms = 0
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub processing_delay_ms: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[logging]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub processing_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Cosmetic wait before results are shown; zero disables it
    pub processing_delay: Duration,
    pub log_level: String,
    /// TOML file the configuration was read from, if any
    pub config_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolves [`ServiceConfig`] for one named service
pub struct ConfigResolver {
    service_name: String,
}

impl ConfigResolver {
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
        }
    }

    /// Platform config location: `<config_dir>/cgp/<service>.toml`
    ///
    /// `~/.config/cgp/` on Linux, `~/Library/Application Support/cgp/` on
    /// macOS, `%APPDATA%\cgp\` on Windows.
    pub fn default_config_path(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cgp").join(format!("{}.toml", self.service_name)))
    }

    /// Read and parse a TOML config file
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load_toml(path: &Path) -> Result<Option<TomlConfig>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::Config(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Resolve every setting using CLI > ENV > TOML > default priority
    pub fn resolve(&self, overrides: ConfigOverrides) -> Result<ServiceConfig> {
        let defaults = CompiledDefaults::new();

        let config_path = overrides
            .config_file
            .clone()
            .or_else(|| env_string(ENV_CONFIG).map(PathBuf::from))
            .or_else(|| self.default_config_path());

        let (toml, config_file) = match config_path {
            Some(path) => match Self::load_toml(&path)? {
                Some(toml) => (toml, Some(path)),
                None => (TomlConfig::default(), None),
            },
            None => (TomlConfig::default(), None),
        };

        let host = overrides
            .host
            .or_else(|| env_string(ENV_HOST))
            .or(toml.host)
            .unwrap_or(defaults.host);

        let port = match overrides.port {
            Some(port) => port,
            None => env_parsed::<u16>(ENV_PORT)?
                .or(toml.port)
                .unwrap_or(defaults.port),
        };

        let processing_delay_ms = match overrides.processing_delay_ms {
            Some(ms) => ms,
            None => env_parsed::<u64>(ENV_PROCESSING_DELAY_MS)?
                .or(toml.processing_delay_ms)
                .unwrap_or(defaults.processing_delay_ms),
        };

        let log_level = overrides
            .log_level
            .or_else(|| env_string(ENV_LOG_LEVEL))
            .or(toml.logging.level)
            .unwrap_or(defaults.log_level);

        if host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }

        Ok(ServiceConfig {
            host,
            port,
            processing_delay: Duration::from_millis(processing_delay_ms),
            log_level,
            config_file,
        })
    }
}

/// Non-empty environment variable value
fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parsed<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env_string(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid {} '{}': {}", name, raw, e))),
        None => Ok(None),
    }
}
