mod list;
mod stats;
mod types;

pub use types::ProjectCard;

use bnx_catalog::Catalog;
use bnx_config::BnxConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectsCommands;

/// Handle `bnx projects`.
pub fn handle(
    action: &ProjectsCommands,
    catalog: &Catalog,
    config: &BnxConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectsCommands::List {
            status,
            category,
            limit,
        } => list::run(
            status.as_deref(),
            category.as_deref(),
            *limit,
            catalog,
            config,
            flags,
        ),
        ProjectsCommands::Stats => stats::run(catalog, flags),
    }
}
