//! CLI configuration file support
//!
//! Handles parsing of `.sb-emulator-config.toml` configuration files and
//! environment variable overrides.

use super::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".sb-emulator-config.toml";

/// Environment variable for pretty-printed output (`true`/`false`)
pub const ENV_PRETTY: &str = "SB_EMULATOR_CONFIG_PRETTY";

/// Environment variable for the log filter (e.g. `debug`)
pub const ENV_LOG: &str = "SB_EMULATOR_CONFIG_LOG";

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Indent the generated JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// `tracing` filter directive, written to stderr
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main configuration structure
///
/// Represents the `.sb-emulator-config.toml` configuration file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl CliConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from an explicit file, or from `CONFIG_FILENAME`
    /// in the current directory.
    ///
    /// An explicit path must exist; the default file is optional and falls
    /// back to defaults. Environment overrides are applied last.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, CliError> {
        let mut config = match explicit_path {
            Some(path) => Self::load_file(path)?,
            None if Path::new(CONFIG_FILENAME).exists() => {
                Self::load_file(Path::new(CONFIG_FILENAME))?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(pretty) = std::env::var(ENV_PRETTY)
            && let Ok(pretty) = pretty.trim().parse()
        {
            self.output.pretty = pretty;
        }

        if let Ok(level) = std::env::var(ENV_LOG)
            && !level.trim().is_empty()
        {
            self.logging.level = level;
        }
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Service Bus emulator config converter settings

[output]
# Indent the generated Config.json
pretty = true

[logging]
# tracing filter for diagnostics on stderr (error, warn, info, debug, trace)
level = "warn"
"#
}
