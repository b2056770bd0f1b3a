use clap::Subcommand;

use crate::cli::subcommands::{ProjectsCommands, ReportCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Research projects shown on the dashboard.
    Projects {
        #[command(subcommand)]
        action: ProjectsCommands,
    },
    /// Project reports and PDF export.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Interactive session: login, dashboard, report view.
    Shell,
}
