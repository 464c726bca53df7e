use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Package manager binary queried for the global registry.
    #[serde(default = "default_manager")]
    pub manager: String,
    #[serde(default = "default_ping_timeout")]
    pub ping_timeout_secs: u64,
}

fn default_manager() -> String {
    "npm".to_string()
}

fn default_ping_timeout() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manager: default_manager(),
            ping_timeout_secs: default_ping_timeout(),
        }
    }
}

impl Settings {
    /// The manager binary for this invocation, honouring a command-line override.
    pub fn manager_program(&self, override_program: Option<&str>) -> String {
        override_program
            .map(str::to_string)
            .unwrap_or_else(|| self.manager.clone())
    }
}
