use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AnalysisResult, ChartSpec, ResearchProject};

/// Everything shown for one project view, assembled on demand.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Report {
    pub project: ResearchProject,
    pub analysis: AnalysisResult,
    pub charts: Vec<ChartSpec>,
    pub generated_at: DateTime<Utc>,
}
