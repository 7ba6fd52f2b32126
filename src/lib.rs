//! Service Bus Emulator Config - converts namespace exports into emulator configuration
//!
//! Provides:
//! - A duration codec for clock-style (`[D.]HH:MM:SS`) and ISO 8601 durations
//! - An importer mapping exported queues, topics and subscriptions (XML)
//!   onto emulator entities
//! - A JSON exporter for the emulator's `Config.json`
//! - An optional command-line wrapper (`cli` feature)

#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;
pub mod duration;
pub mod export;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use convert::{ConversionError, convert_to_json, transform};
pub use duration::{
    DurationError, clamp_millis, normalize_duration, parse_clock_duration, parse_iso_duration,
    to_iso_duration,
};
pub use export::{ExportError, ExportResult, JSONExporter};
pub use import::{ImportError, ServiceBusImporter};

// Re-export models
pub use models::{
    EmulatorConfig, Namespace, Queue, QueueProperties, Subscription, SubscriptionProperties,
    Topic, TopicProperties,
};
