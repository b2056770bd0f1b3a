use bnx_catalog::Catalog;
use bnx_config::BnxConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &BnxConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let catalog = Catalog::new(config.catalog.on_missing);
    match command {
        Commands::Projects { action } => {
            commands::projects::handle(&action, &catalog, config, flags)
        }
        Commands::Report { action } => {
            commands::report::handle(&action, &catalog, config, flags).await
        }
        Commands::Shell => commands::shell::handle(config, flags).await,
    }
}
