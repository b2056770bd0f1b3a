use anyhow::Context;
use chrono::Utc;

use bnx_catalog::Catalog;
use bnx_config::BnxConfig;
use bnx_core::entities::{Report, Session};

use super::types::{ReportOverview, ReportResponse};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::session::login;
use crate::output::output;

pub fn handle(
    project_id: &str,
    email: &str,
    catalog: &Catalog,
    config: &BnxConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = login(email, config)?;
    let report = catalog
        .report(project_id, Utc::now())
        .with_context(|| format!("failed to assemble report for '{project_id}'"))?;
    print(&report, &session, flags.format)
}

/// Print `report` in `format`. Tables get the flattened overview.
pub fn print(report: &Report, session: &Session, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output(&ReportOverview::new(report, session), format),
        OutputFormat::Json | OutputFormat::Raw => output(&ReportResponse { session, report }, format),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use bnx_catalog::Catalog;
    use bnx_config::BnxConfig;

    use super::super::types::ReportOverview;
    use crate::commands::shared::session::login;

    #[test]
    fn overview_formats_genetic_report() {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let report = Catalog::default().report("gen-001", generated_at).unwrap();
        let session = login("jane.doe@example.com", &BnxConfig::default()).unwrap();

        let overview = ReportOverview::new(&report, &session);
        assert_eq!(overview.samples, "12 000");
        assert_eq!(overview.significance, "p = 0.001");
        assert_eq!(overview.confidence, "95%");
        assert_eq!(overview.generated_for, "Jane Doe");
        assert_eq!(overview.generated_on, "15/03/2024");
        assert_eq!(overview.charts.len(), report.charts.len());
    }

    #[test]
    fn unknown_project_is_an_error() {
        let err = Catalog::default()
            .report("nope-000", Utc::now())
            .expect_err("unknown id");
        assert!(err.to_string().contains("nope-000"));
    }
}
