//! Topic and subscription entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A topic with at least one subscription
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Topic {
    /// Topic path from the export
    pub name: String,
    pub properties: TopicProperties,
    pub subscriptions: Vec<Subscription>,
}

/// Topic settings understood by the emulator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopicProperties {
    pub default_message_time_to_live: String,
    pub duplicate_detection_history_time_window: String,
    pub auto_delete_on_idle: String,
    pub max_size_in_megabytes: i64,
    pub requires_duplicate_detection: bool,
    pub enable_batched_operations: bool,
    pub support_ordering: bool,
    pub enable_filtering_messages_before_publishing: bool,
    pub is_anonymous_accessible: bool,
    pub status: String,
    pub user_metadata: String,
    pub enable_partitioning: bool,
    pub enable_express: bool,
    pub is_read_only: bool,
}

/// A subscription on a topic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscription {
    pub name: String,
    pub properties: SubscriptionProperties,
    /// Filter rules. Rule extraction is not supported, so this is always empty.
    pub rules: Vec<SubscriptionRule>,
}

/// Subscription settings; the queue settings minus duplicate detection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionProperties {
    pub lock_duration: String,
    pub requires_session: bool,
    pub default_message_time_to_live: String,
    pub dead_lettering_on_message_expiration: bool,
    pub max_delivery_count: i64,
    pub forward_to: String,
    pub forward_dead_lettered_messages_to: String,
}

/// Emulator rule shape, kept so configurations carrying rules can be read back
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionRule {
    pub name: String,
    pub properties: SubscriptionRuleProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionRuleProperties {
    pub is_read_only: bool,
    pub filter: bool,
    pub action: bool,
    pub correlation_filter: CorrelationFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CorrelationFilter {
    pub properties: BTreeMap<String, String>,
}
