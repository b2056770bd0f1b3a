use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, ProjectStatus};

/// A research project listed on the dashboard. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchProject {
    /// Catalog key, e.g. `gen-001`.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: ProjectStatus,
    pub completion_date: NaiveDate,
    pub sample_size: u32,
}
