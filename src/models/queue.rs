//! Queue entity

use serde::{Deserialize, Serialize};

/// A queue in the emulator namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Queue {
    /// Queue path from the export
    pub name: String,
    pub properties: QueueProperties,
}

/// Queue settings understood by the emulator
///
/// Duration fields hold canonical ISO 8601 strings, or `""` when the export
/// did not provide a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueProperties {
    pub lock_duration: String,
    pub requires_duplicate_detection: bool,
    pub requires_session: bool,
    pub default_message_time_to_live: String,
    pub dead_lettering_on_message_expiration: bool,
    pub duplicate_detection_history_time_window: String,
    pub max_delivery_count: i64,
    pub forward_to: String,
    pub forward_dead_lettered_messages_to: String,
}
