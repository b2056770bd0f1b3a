pub mod export;
pub mod show;
mod types;

use bnx_catalog::Catalog;
use bnx_config::BnxConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;

/// Handle `bnx report`.
pub async fn handle(
    action: &ReportCommands,
    catalog: &Catalog,
    config: &BnxConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::Show { project_id, email } => {
            show::handle(project_id, email, catalog, config, flags)
        }
        ReportCommands::Export(args) => export::handle(args, catalog, config, flags).await,
    }
}
