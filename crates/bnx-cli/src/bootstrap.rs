use anyhow::Context;
use bnx_config::BnxConfig;

/// Load `.env`, then the layered config.
pub fn load_config() -> anyhow::Result<BnxConfig> {
    let config = BnxConfig::load_with_dotenv().context("failed to load bionext configuration")?;
    tracing::debug!(
        break_policy = %config.report.break_policy,
        on_missing = %config.catalog.on_missing,
        output_dir = %config.report.output_dir,
        "configuration loaded"
    );
    Ok(config)
}
