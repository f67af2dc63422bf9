//! Configuration loading for the observer.
//!
//! The optional configuration file is `nextblock-config.yaml` in the working
//! directory. Every field has a default, so an empty file, a partial file,
//! or no file at all are all valid.

use std::path::Path;

use serde::Deserialize;

/// Environment variable that overrides `output.format`.
pub const OUTPUT_FORMAT_ENV: &str = "NEXTBLOCK_OUTPUT_FORMAT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unrecognized value.
    #[error("invalid value for {name}: {value:?} (expected \"text\" or \"json\")")]
    InvalidOverride {
        /// The environment variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level observer configuration.
///
/// Mirrors the structure of `nextblock-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObserverConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl ObserverConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `NEXTBLOCK_OUTPUT_FORMAT` overrides `output.format`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] if the environment override is not
    /// a known format.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] for a bad environment override.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as null rather than an empty map.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for when no file exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] for a bad environment
    /// override.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let value = std::env::var(OUTPUT_FORMAT_ENV).ok();
        self.output.override_format(value.as_deref())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable multi-line report.
    #[default]
    Text,
    /// Pretty-printed JSON observations.
    Json,
}

impl OutputFormat {
    /// Parse a format name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Include tidal readings in the report.
    #[serde(default = "default_true")]
    pub include_tidal: bool,
}

impl OutputConfig {
    /// Replace the format with an override value, if one is present.
    fn override_format(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(value) = value else {
            return Ok(());
        };
        self.format =
            OutputFormat::from_name(value).ok_or_else(|| ConfigError::InvalidOverride {
                name: OUTPUT_FORMAT_ENV,
                value: value.to_owned(),
            })?;
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_tidal: true,
        }
    }
}

// ---- Default value functions ----

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_true() -> bool {
    true
}
