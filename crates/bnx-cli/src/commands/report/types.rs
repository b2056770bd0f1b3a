use serde::Serialize;

use bnx_core::entities::{Report, Session};
use bnx_core::format::{date_fr, group_thousands, percent, significance};

/// Full report plus the session it was generated for (`json`/`raw`).
#[derive(Debug, Serialize)]
pub struct ReportResponse<'a> {
    pub session: &'a Session,
    pub report: &'a Report,
}

/// Flattened report shown as a key/value table.
#[derive(Debug, Serialize)]
pub struct ReportOverview {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    pub status: &'static str,
    pub completion_date: String,
    pub samples: String,
    pub significance: String,
    pub confidence: String,
    pub summary: String,
    pub key_findings: Vec<String>,
    pub methodology: String,
    pub limitations: Vec<String>,
    pub charts: Vec<String>,
    pub generated_for: String,
    pub generated_on: String,
}

impl ReportOverview {
    #[must_use]
    pub fn new(report: &Report, session: &Session) -> Self {
        let project = &report.project;
        let analysis = &report.analysis;
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.label(),
            status: project.status.label(),
            completion_date: date_fr(project.completion_date),
            samples: group_thousands(u64::from(project.sample_size)),
            significance: format!("p = {}", significance(analysis.statistical_significance)),
            confidence: percent(analysis.confidence_level),
            summary: analysis.summary.clone(),
            key_findings: analysis.key_findings.clone(),
            methodology: analysis.methodology.clone(),
            limitations: analysis.limitations.clone(),
            charts: report.charts.iter().map(|chart| chart.title.clone()).collect(),
            generated_for: session.display_name.clone(),
            generated_on: date_fr(report.generated_at.date_naive()),
        }
    }
}
