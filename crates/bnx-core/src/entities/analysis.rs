use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pre-baked analysis text and statistics for one project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalysisResult {
    pub summary: String,
    pub key_findings: Vec<String>,
    /// p-value.
    pub statistical_significance: f64,
    /// Percentage, e.g. `95.0`.
    pub confidence_level: f64,
    pub methodology: String,
    pub limitations: Vec<String>,
}
