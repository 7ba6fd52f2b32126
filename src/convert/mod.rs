//! Format converter module
//!
//! Provides the end-to-end Service Bus XML export to emulator configuration
//! conversion.

pub mod converter;

pub use converter::{ConversionError, convert_to_json, transform};
