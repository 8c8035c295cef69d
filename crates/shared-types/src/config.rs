use serde::{Deserialize, Serialize};

/// Join endpoint of a queue service running locally on its default port.
pub const DEFAULT_JOIN_ACTION: &str = "http://127.0.0.1:5000/join";

fn default_join_action() -> String {
    DEFAULT_JOIN_ACTION.to_string()
}

/// Settings for the join form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinConfig {
    /// Absolute URL rendered as the form's `action` and used as the POST target.
    #[serde(default = "default_join_action")]
    pub action: String,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            action: default_join_action(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub join: JoinConfig,
}
