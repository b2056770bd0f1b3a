use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bnx` binary.
#[derive(Debug, Parser)]
#[command(
    name = "bnx",
    version,
    about = "BioNext - research project dashboard and PDF reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colour table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress spinner: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use bnx_config::BreakPolicy;
    use clap::{CommandFactory, Parser};

    use super::subcommands::{ProjectsCommands, ReportCommands};
    use super::{Cli, ColorMode, Commands, OutputFormat, ProgressMode};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "bnx",
            "--format",
            "table",
            "--limit",
            "2",
            "--verbose",
            "projects",
            "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(2));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Projects {
                action: ProjectsCommands::Stats
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["bnx", "shell", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["bnx", "--format", "xml", "shell"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn color_and_progress_default_to_auto() {
        let cli = Cli::try_parse_from(["bnx", "shell"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.color, ColorMode::Auto);
        assert_eq!(flags.progress, ProgressMode::Auto);
        assert_eq!(flags.format, OutputFormat::Json);
    }

    #[test]
    fn projects_list_accepts_filters() {
        let cli = Cli::try_parse_from([
            "bnx",
            "projects",
            "list",
            "--status",
            "in-progress",
            "--category",
            "genetic",
            "--limit",
            "3",
        ])
        .expect("cli should parse");

        let Commands::Projects {
            action:
                ProjectsCommands::List {
                    status,
                    category,
                    limit,
                },
        } = cli.command
        else {
            panic!("expected projects list");
        };
        assert_eq!(status.as_deref(), Some("in-progress"));
        assert_eq!(category.as_deref(), Some("genetic"));
        assert_eq!(limit, Some(3));
    }

    #[test]
    fn report_export_parses_overrides() {
        let cli = Cli::try_parse_from([
            "bnx",
            "report",
            "export",
            "gen-001",
            "--email",
            "jane.doe@example.com",
            "--out-dir",
            "/tmp/out",
            "--policy",
            "legacy",
            "--no-charts",
        ])
        .expect("cli should parse");

        let Commands::Report {
            action: ReportCommands::Export(args),
        } = cli.command
        else {
            panic!("expected report export");
        };
        assert_eq!(args.project_id, "gen-001");
        assert_eq!(args.email, "jane.doe@example.com");
        assert_eq!(args.out_dir.as_deref(), Some("/tmp/out"));
        assert_eq!(
            args.policy.map(|policy| policy.into_policy()),
            Some(BreakPolicy::Legacy)
        );
        assert!(args.no_charts);
    }

    #[test]
    fn report_show_requires_email() {
        let parsed = Cli::try_parse_from(["bnx", "report", "show", "gen-001"]);
        assert!(parsed.is_err());
    }
}
