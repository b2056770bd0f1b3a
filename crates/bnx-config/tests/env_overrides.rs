use figment::Jail;
use bnx_config::{BnxConfig, BreakPolicy, MissPolicy};

#[test]
fn env_vars_map_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("BIONEXT_REPORT__BREAK_POLICY", "legacy");
        jail.set_env("BIONEXT_REPORT__PAGE__MARGIN", "25");
        jail.set_env("BIONEXT_CATALOG__ON_MISSING", "error");
        jail.set_env("BIONEXT_SESSION__ROLE", "Stagiaire");

        let config = BnxConfig::load().expect("config loads");
        assert_eq!(config.report.break_policy, BreakPolicy::Legacy);
        assert_eq!(config.report.page.margin, 25.0);
        assert_eq!(config.catalog.on_missing, MissPolicy::Error);
        assert_eq!(config.session.role, "Stagiaire");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bionext")?;
        jail.create_file(
            ".bionext/config.toml",
            r#"
[report]
file_prefix = "FromToml"
"#,
        )?;
        jail.set_env("BIONEXT_REPORT__FILE_PREFIX", "FromEnv");

        let config = BnxConfig::load().expect("config loads");
        assert_eq!(config.report.file_prefix, "FromEnv");
        Ok(())
    });
}

#[test]
fn invalid_env_override_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("BIONEXT_REPORT__CHART_HEIGHT", "0");
        let err = BnxConfig::load().expect_err("zero chart height is invalid");
        assert!(err.to_string().contains("report.chart_height"));
        Ok(())
    });
}
