//! Entity structs for all BioNext domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod analysis;
mod chart;
mod project;
mod report;
mod session;

pub use analysis::AnalysisResult;
pub use chart::{ChartSpec, Series, SeriesData, SeriesFill, XyPoint};
pub use project::ResearchProject;
pub use report::Report;
pub use session::Session;
