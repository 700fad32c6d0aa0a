//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shell server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built frontend bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// SPA entry document inside `static_dir`
    #[serde(default = "default_index_file")]
    pub index_file: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("storefront-ui/dist")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            index_file: default_index_file(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full path of the SPA entry document
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!("unknown log format '{}'", other))),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> (Self, ConfigReport) {
        let mut config = Config::default();
        let report = ConfigReport {
            source: None,
            warnings: config.apply_env_overrides(),
        };
        (config, report)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<(Self, ConfigReport), ConfigError> {
        let mut config = Self::load(path)?;
        let report = ConfigReport {
            source: Some(path.to_path_buf()),
            warnings: config.apply_env_overrides(),
        };
        Ok((config, report))
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is set up, so nothing is logged here; problems
    /// are collected in the returned report.
    pub fn load_default() -> (Self, ConfigReport) {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("storefront").join("config.toml")),
            Some(PathBuf::from("/etc/storefront/config.toml")),
            Some(PathBuf::from("./storefront.toml")),
        ];
        Self::load_first(config_paths.iter().flatten(), |key| std::env::var(key).ok())
    }

    /// Load the first readable file among `paths`, falling back to defaults
    fn load_first<'a>(
        paths: impl IntoIterator<Item = &'a PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, ConfigReport) {
        let mut skipped = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(mut config) => {
                    skipped.extend(config.apply_overrides(&lookup));
                    let report = ConfigReport {
                        source: Some(path.clone()),
                        warnings: skipped,
                    };
                    return (config, report);
                }
                Err(e) => skipped.push(format!("Skipping config file: {}", e)),
            }
        }

        let mut config = Config::default();
        skipped.extend(config.apply_overrides(&lookup));
        let report = ConfigReport {
            source: None,
            warnings: skipped,
        };
        (config, report)
    }

    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the process environment in practice)
    ///
    /// Returns a warning for every override that was ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(host) = lookup("STOREFRONT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("STOREFRONT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid STOREFRONT_PORT '{}'", port)),
            }
        }
        if let Some(dir) = lookup("STOREFRONT_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("STOREFRONT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("STOREFRONT_LOG_FORMAT") {
            match format.parse::<LogFormat>() {
                Ok(f) => self.logging.format = f,
                Err(e) => warnings.push(format!("Ignoring STOREFRONT_LOG_FORMAT: {}", e)),
            }
        }

        warnings
    }
}

/// Where the configuration came from and what was ignored while loading it
#[derive(Debug, Clone, Default)]
pub struct ConfigReport {
    /// File the configuration was read from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Skipped files and ignored overrides
    pub warnings: Vec<String>,
}

impl ConfigReport {
    /// Emit the report; call once the subscriber is installed
    pub fn log(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Storefront Configuration
#
# Environment variables override these settings:
# - STOREFRONT_HOST
# - STOREFRONT_PORT
# - STOREFRONT_STATIC_DIR
# - STOREFRONT_LOG_LEVEL
# - STOREFRONT_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8084

# Directory with the built frontend bundle (trunk build output)
static_dir = "storefront-ui/dist"

# SPA entry document inside static_dir
index_file = "index.html"

# Allowed CORS origins for the /api endpoints (empty = any)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(config.server.index_path(), PathBuf::from("storefront-ui/dist/index.html"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.addr(), defaults.server.addr());
        assert_eq!(config.server.static_dir, defaults.server.static_dir);
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[server]\nport = 9000\n\n[logging]\nformat = \"json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOREFRONT_HOST", "127.0.0.1"),
            ("STOREFRONT_PORT", "3000"),
            ("STOREFRONT_STATIC_DIR", "/srv/shop"),
            ("STOREFRONT_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let warnings = config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert!(warnings.is_empty());

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.server.static_dir, PathBuf::from("/srv/shop"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_overrides_reported() {
        let mut config = Config::default();
        let warnings = config.apply_overrides(|key| match key {
            "STOREFRONT_PORT" => Some("not-a-port".to_string()),
            "STOREFRONT_LOG_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8084);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("STOREFRONT_PORT"));
        assert!(warnings[1].contains("STOREFRONT_LOG_FORMAT"));
        assert!(warnings[1].contains("xml"));
    }

    #[test]
    fn test_valid_overrides_produce_no_warnings() {
        let mut config = Config::default();
        let warnings = config.apply_overrides(|key| match key {
            "STOREFRONT_PORT" => Some("9001".to_string()),
            _ => None,
        });
        assert!(warnings.is_empty());
        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn test_load_first_reports_malformed_file() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&bad, "[server\nport = 9999").unwrap();
        std::fs::write(&good, "[server]\nport = 7000\n").unwrap();

        let (config, report) = Config::load_first(&[bad.clone(), good.clone()], |key| match key {
            "STOREFRONT_LOG_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 7000);
        assert_eq!(report.source, Some(good));
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("bad.toml"));
        assert!(report.warnings[1].contains("STOREFRONT_LOG_FORMAT"));
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("storefront.toml");
        let missing = dir.path().join("absent.toml");
        std::fs::write(&bad, "[server\nport = 9999").unwrap();

        let (config, report) = Config::load_first(&[missing, bad], |key| match key {
            "STOREFRONT_PORT" => Some("18084".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 18084);
        assert!(report.source.is_none());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("Skipping config file"));
    }
}
