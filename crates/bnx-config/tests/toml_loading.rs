//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use bnx_config::{BnxConfig, BreakPolicy, MissPolicy};

#[test]
fn loads_report_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[report]
product_label = "BioNext Labs"
file_prefix = "BNL"
output_dir = "./exports"
break_policy = "legacy"
include_charts = false
chart_height = 60.0

[report.page]
margin = 15.0
footer_height = 18.0

[report.thresholds]
finding_item = 25.0
"#,
        )?;

        let config = BnxConfig::from_figment(
            Figment::from(Serialized::defaults(BnxConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config should validate");

        assert_eq!(config.report.product_label, "BioNext Labs");
        assert_eq!(config.report.file_prefix, "BNL");
        assert_eq!(config.report.output_dir, "./exports");
        assert_eq!(config.report.break_policy, BreakPolicy::Legacy);
        assert!(!config.report.include_charts);
        assert_eq!(config.report.chart_height, 60.0);
        assert_eq!(config.report.page.margin, 15.0);
        assert_eq!(config.report.page.footer_height, 18.0);
        // untouched fields keep their defaults
        assert_eq!(config.report.page.width, 210.0);
        assert_eq!(config.report.thresholds.finding_item, 25.0);
        assert_eq!(config.report.thresholds.limitation_item, 15.0);
        Ok(())
    });
}

#[test]
fn loads_catalog_and_session_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[catalog]
on_missing = "error"

[session]
role = "Biostatisticien"

[general]
default_limit = 3
"#,
        )?;

        let config: BnxConfig = Figment::from(Serialized::defaults(BnxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.catalog.on_missing, MissPolicy::Error);
        assert_eq!(config.session.role, "Biostatisticien");
        assert_eq!(config.general.default_limit, 3);
        Ok(())
    });
}

#[test]
fn invalid_geometry_is_rejected_after_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[report.page]
width = 30.0
"#,
        )?;

        let result = BnxConfig::from_figment(
            Figment::from(Serialized::defaults(BnxConfig::default()))
                .merge(Toml::file("config.toml")),
        );
        let err = result.expect_err("narrow page should be rejected");
        assert!(err.to_string().contains("report.page.margin"));
        Ok(())
    });
}

#[test]
fn unknown_policy_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[report]
break_policy = "sometimes"
"#,
        )?;

        let result: Result<BnxConfig, _> =
            Figment::from(Serialized::defaults(BnxConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bionext")?;
        jail.create_file(
            ".bionext/config.toml",
            r#"
[report]
output_dir = "/tmp/bionext-reports"
"#,
        )?;

        let config = BnxConfig::load().expect("config loads");
        assert_eq!(config.report.output_dir, "/tmp/bionext-reports");
        Ok(())
    });
}
