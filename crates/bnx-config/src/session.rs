//! Session defaults applied at login.

use serde::{Deserialize, Serialize};

fn default_role() -> String {
    "Chercheur Senior".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Role attached to every session (the login step does not ask for one).
    #[serde(default = "default_role")]
    pub role: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            role: default_role(),
        }
    }
}
