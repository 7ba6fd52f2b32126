//! Import functionality
//!
//! Reads Service Bus namespace exports (XML) into emulator entities:
//! - `xml`: owned element tree built from the raw document
//! - `servicebus`: queue/topic/subscription extraction rules

pub mod servicebus;
pub mod xml;

pub use servicebus::ServiceBusImporter;
pub use xml::{XmlElement, XmlNode};

/// Error during import
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
}
