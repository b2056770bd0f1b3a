//! End-to-end: catalog report to a PDF file on disk.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use bnx_catalog::Catalog;
use bnx_config::{ReportConfig, SessionConfig};
use bnx_report::{ReportError, export_report};

#[test]
fn genetic_report_exports_under_sanitized_name() {
    let dir = tempfile::tempdir().unwrap();
    let session = bnx_auth::login("jane.doe@example.com", &SessionConfig::default()).unwrap();
    assert_eq!(session.display_name, "Jane Doe");

    let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
    let report = Catalog::default().report("gen-001", at).unwrap();
    let config = ReportConfig::default();

    let outcome = export_report(&report, &session, &config, dir.path()).unwrap();
    assert_eq!(
        outcome.file,
        dir.path().join("BioNext_Analyse_g_n_tique_Cohorte_A_2025-01-15.pdf")
    );

    let bytes = std::fs::read(&outcome.file).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(bytes.len(), outcome.bytes);
    assert!(outcome.pages >= 1);

    let rendered = bnx_report::build_pdf(&report, &session, &config).unwrap();
    let texts: Vec<&str> = rendered.layout.texts().collect();
    assert!(texts.contains(&"Échantillons: 12 000 patients"));
    assert!(texts.contains(&"Significativité statistique: p = 0.001"));
    assert!(texts.contains(&"Niveau de confiance: 95%"));
}

#[test]
fn unwritable_target_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the output directory should be.
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let session = bnx_auth::login("jane.doe@example.com", &SessionConfig::default()).unwrap();
    let report = Catalog::default().report("bio-789", Utc::now()).unwrap();
    let err = export_report(&report, &session, &ReportConfig::default(), &blocker)
        .expect_err("cannot write into a file");
    assert!(matches!(err, ReportError::Io { .. }));

    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}
