//! Determinism and miss-policy behaviour of catalog lookups.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;

use bnx_catalog::Catalog;
use bnx_config::MissPolicy;
use bnx_core::entities::ResearchProject;
use bnx_core::enums::{ChartKind, Category, ProjectStatus};
use bnx_core::errors::CoreError;

fn unknown_project() -> ResearchProject {
    ResearchProject {
        id: "zzz-404".into(),
        title: "Projet inconnu".into(),
        description: "Aucune donnée".into(),
        category: Category::Cellular,
        status: ProjectStatus::Pending,
        completion_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        sample_size: 42,
    }
}

#[rstest]
#[case("gen-001")]
#[case("ther-045")]
#[case("cell-x01")]
#[case("bio-789")]
fn lookups_are_stable_across_calls(#[case] id: &str) {
    let catalog = Catalog::default();
    let project = catalog.project(id).unwrap();

    let first = catalog.analysis(&project).unwrap();
    let second = catalog.analysis(&project).unwrap();
    assert_eq!(first, second);

    let charts_a = catalog.charts(&project).unwrap();
    let charts_b = catalog.charts(&project).unwrap();
    assert_eq!(charts_a, charts_b);
    assert_eq!(charts_a.len(), 2);
}

#[rstest]
#[case("gen-001", 0.001, 95.0)]
#[case("ther-045", 0.0001, 99.0)]
#[case("cell-x01", 0.005, 95.0)]
#[case("bio-789", 0.0001, 99.0)]
fn statistics_per_project(#[case] id: &str, #[case] p: f64, #[case] confidence: f64) {
    let catalog = Catalog::default();
    let analysis = catalog.analysis(&catalog.project(id).unwrap()).unwrap();
    assert_eq!(analysis.statistical_significance, p);
    assert_eq!(analysis.confidence_level, confidence);
    assert_eq!(analysis.key_findings.len(), 5);
    assert_eq!(analysis.limitations.len(), 3);
}

#[test]
fn unknown_id_falls_back_to_default_dataset() {
    let catalog = Catalog::new(MissPolicy::Fallback);
    let default_project = catalog.project("gen-001").unwrap();
    let unknown = unknown_project();

    let fallback = catalog.analysis(&unknown).unwrap();
    let default = catalog.analysis(&default_project).unwrap();
    assert_eq!(fallback.key_findings, default.key_findings);
    assert_eq!(fallback.methodology, default.methodology);
    // the template is the default one, the sample size is the caller's
    assert!(fallback.summary.contains("Sur les 42 échantillons"));

    let charts = catalog.charts(&unknown).unwrap();
    assert_eq!(charts, catalog.charts(&default_project).unwrap());
    assert_eq!(charts[0].kind, ChartKind::Pie);
}

#[test]
fn unknown_id_errors_under_strict_policy() {
    let catalog = Catalog::new(MissPolicy::Error);
    let err = catalog.analysis(&unknown_project()).expect_err("strict policy");
    assert!(matches!(err, CoreError::NotFound { ref id, .. } if id == "zzz-404"));
    assert!(catalog.charts(&unknown_project()).is_err());
}

#[test]
fn or_default_ignores_policy() {
    let strict = Catalog::new(MissPolicy::Error);
    assert!(strict.analysis(&unknown_project()).is_err());
    let analysis = Catalog::analysis_or_default(&unknown_project());
    assert_eq!(analysis.statistical_significance, 0.001);
    assert_eq!(Catalog::charts_or_default(&unknown_project()).len(), 2);
}

#[test]
fn unknown_project_id_is_not_found() {
    let err = Catalog::default().project("nope").expect_err("unknown project");
    assert_eq!(err.to_string(), "Entity not found: project nope");
}

#[test]
fn report_bundles_project_analysis_and_charts() {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let report = Catalog::default().report("bio-789", at).unwrap();
    assert_eq!(report.project.sample_size, 567);
    assert_eq!(report.generated_at, at);
    assert_eq!(report.charts[1].kind, ChartKind::Scatter);
    assert_eq!(
        report.charts[1].axis_titles.as_ref().map(|(x, _)| x.as_str()),
        Some("Score MMSE")
    );
}
