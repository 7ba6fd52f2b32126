//! JSON exporter for emulator configurations.

use super::{ExportError, ExportResult};
use crate::models::EmulatorConfig;

/// Exporter for the emulator's `Config.json` format.
#[derive(Debug, Clone, Copy)]
pub struct JSONExporter {
    /// Indent the output (default) or emit a single line
    pub pretty: bool,
}

impl Default for JSONExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JSONExporter {
    /// Create an exporter producing indented JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter producing single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Export a configuration to JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use servicebus_emulator_config::export::json::JSONExporter;
    /// use servicebus_emulator_config::models::EmulatorConfig;
    ///
    /// let result = JSONExporter::compact().export(&EmulatorConfig::default()).unwrap();
    /// assert_eq!(result.format, "json");
    /// assert!(result.content.starts_with(r#"{"UserConfig":{"Namespaces":[{"Name":"sbemulatorns""#));
    /// ```
    pub fn export(&self, config: &EmulatorConfig) -> Result<ExportResult, ExportError> {
        let content = if self.pretty {
            serde_json::to_string_pretty(config)
        } else {
            serde_json::to_string(config)
        }
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

        Ok(ExportResult {
            content,
            format: "json".to_string(),
        })
    }
}
