use clap::{Args, Subcommand, ValueEnum};

use bnx_config::BreakPolicy;

/// Report commands. Both take the login email explicitly.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Show the assembled report for a project.
    Show {
        /// Project id, e.g. gen-001.
        project_id: String,
        /// Email used to log in.
        #[arg(long)]
        email: String,
    },
    /// Export the report as a PDF.
    Export(ExportArgs),
}

/// Arguments for `bnx report export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Project id, e.g. gen-001.
    pub project_id: String,
    /// Email used to log in.
    #[arg(long)]
    pub email: String,
    /// Target directory (defaults to `report.output_dir`).
    #[arg(long)]
    pub out_dir: Option<String>,
    /// Page break policy override.
    #[arg(long)]
    pub policy: Option<PolicyArg>,
    /// Leave charts out of the PDF.
    #[arg(long)]
    pub no_charts: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyArg {
    Measured,
    Legacy,
}

impl PolicyArg {
    #[must_use]
    pub const fn into_policy(self) -> BreakPolicy {
        match self {
            Self::Measured => BreakPolicy::Measured,
            Self::Legacy => BreakPolicy::Legacy,
        }
    }
}
