use clap::Subcommand;

/// Dashboard commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectsCommands {
    /// List research projects.
    List {
        /// Status filter: completed, in-progress, pending.
        #[arg(long)]
        status: Option<String>,
        /// Category filter: genetic, therapeutic, cellular, biochemical.
        #[arg(long)]
        category: Option<String>,
        /// Maximum number of projects.
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Dashboard statistic cards.
    Stats,
}
