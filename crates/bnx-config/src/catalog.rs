//! Catalog lookup policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a dataset lookup does when the project id has no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Return the default dataset and log a warning.
    #[default]
    Fallback,
    /// Return a not-found error.
    Error,
}

impl MissPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for MissPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub on_missing: MissPolicy,
}
