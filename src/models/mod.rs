//! Models module
//!
//! Defines the emulator configuration entities produced by the importer.
//! Field names serialize in PascalCase to match the emulator's `Config.json`.

pub mod emulator;
pub mod queue;
pub mod topic;

pub use emulator::{
    EMULATOR_LOGGING_TYPE, EMULATOR_NAMESPACE, EmulatorConfig, Logging, Namespace, UserConfig,
};
pub use queue::{Queue, QueueProperties};
pub use topic::{
    CorrelationFilter, Subscription, SubscriptionProperties, SubscriptionRule,
    SubscriptionRuleProperties, Topic, TopicProperties,
};
