//! Service Bus export to emulator configuration converter

use crate::export::{ExportError, JSONExporter};
use crate::import::{ImportError, ServiceBusImporter};
use crate::models::EmulatorConfig;

/// Error during format conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),
    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}

/// Transform a Service Bus XML export into an emulator configuration.
///
/// Each call is independent: the result depends only on `xml_content`.
///
/// # Example
///
/// ```rust
/// use servicebus_emulator_config::convert::transform;
///
/// let config = transform("<Namespace/>").unwrap();
/// let ns = config.namespace().unwrap();
/// assert_eq!(ns.name, "sbemulatorns");
/// assert!(ns.queues.is_empty() && ns.topics.is_empty());
/// ```
pub fn transform(xml_content: &str) -> Result<EmulatorConfig, ConversionError> {
    Ok(ServiceBusImporter::new().import(xml_content)?)
}

/// Transform a Service Bus XML export straight to emulator `Config.json` text.
///
/// # Arguments
///
/// * `xml_content` - The exported namespace as XML text
/// * `pretty` - Indent the JSON output
pub fn convert_to_json(xml_content: &str, pretty: bool) -> Result<String, ConversionError> {
    let config = transform(xml_content)?;
    let exporter = JSONExporter { pretty };
    Ok(exporter.export(&config)?.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_malformed_xml_is_import_error() {
        let err = transform("<Namespace><Queues></Namespace>").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::ImportError(ImportError::ParseError(_))
        ));
    }

    #[test]
    fn test_convert_to_json_compact() {
        let json = convert_to_json("<Namespace/>", false).unwrap();
        assert_eq!(
            json,
            r#"{"UserConfig":{"Namespaces":[{"Name":"sbemulatorns","Queues":[],"Topics":[]}],"Logging":{"Type":"File"}}}"#
        );
    }
}
