//! Top-level emulator configuration document
//!
//! Serializes as:
//!
//! ```json
//! {
//!   "UserConfig": {
//!     "Namespaces": [{ "Name": "sbemulatorns", "Queues": [], "Topics": [] }],
//!     "Logging": { "Type": "File" }
//!   }
//! }
//! ```

use super::{Queue, Topic};
use serde::{Deserialize, Serialize};

/// Name of the single namespace the emulator serves
pub const EMULATOR_NAMESPACE: &str = "sbemulatorns";

/// Logging sink written into every generated configuration
pub const EMULATOR_LOGGING_TYPE: &str = "File";

/// The full emulator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmulatorConfig {
    pub user_config: UserConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserConfig {
    pub namespaces: Vec<Namespace>,
    pub logging: Logging,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            namespaces: vec![Namespace::default()],
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Namespace {
    pub name: String,
    pub queues: Vec<Queue>,
    pub topics: Vec<Topic>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self {
            name: EMULATOR_NAMESPACE.to_string(),
            queues: Vec::new(),
            topics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logging {
    #[serde(rename = "Type")]
    pub log_type: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            log_type: EMULATOR_LOGGING_TYPE.to_string(),
        }
    }
}

impl EmulatorConfig {
    /// Build a configuration holding the given entities in the emulator namespace.
    pub fn new(queues: Vec<Queue>, topics: Vec<Topic>) -> Self {
        Self {
            user_config: UserConfig {
                namespaces: vec![Namespace {
                    queues,
                    topics,
                    ..Default::default()
                }],
                logging: Logging::default(),
            },
        }
    }

    /// The emulator namespace
    pub fn namespace(&self) -> Option<&Namespace> {
        self.user_config.namespaces.first()
    }
}
