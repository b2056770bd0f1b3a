//! `bnx shell`: the login → dashboard → report navigation as a prompt loop.
//!
//! The session lives in the shell's [`AppState`] and is dropped on logout.

mod command;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};

use bnx_catalog::Catalog;
use bnx_config::BnxConfig;
use bnx_core::entities::{Report, Session};
use bnx_core::navigation::{AppState, Screen};

use command::{HELP, ShellCommand, parse_line};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::projects::ProjectCard;
use crate::commands::report::{export, show};
use crate::output::output;

/// Whether the prompt loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    state: AppState,
    catalog: Catalog,
    config: &'a BnxConfig,
    format: OutputFormat,
    report: Option<Report>,
}

impl<'a> Shell<'a> {
    #[must_use]
    pub fn new(config: &'a BnxConfig, format: OutputFormat) -> Self {
        Self {
            state: AppState::new(),
            catalog: Catalog::new(config.catalog.on_missing),
            config,
            format,
            report: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        match self.state().screen() {
            Screen::Login => "bnx> ".to_string(),
            Screen::Dashboard => "bnx:dashboard> ".to_string(),
            Screen::Report { project_id } => format!("bnx:{project_id}> "),
        }
    }

    pub async fn execute(&mut self, command: ShellCommand) -> anyhow::Result<Flow> {
        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Login(email) => {
                let session = bnx_auth::sign_in(&mut self.state, &email, &self.config.session)?;
                println!("Connecté: {} ({})", session.display_name, session.role);
            }
            ShellCommand::Whoami => {
                output(bnx_auth::require_session(&self.state)?, self.format)?;
            }
            ShellCommand::Projects => {
                bnx_auth::require_session(&self.state)?;
                let cards = self
                    .catalog
                    .projects()
                    .iter()
                    .map(ProjectCard::from)
                    .collect::<Vec<_>>();
                output(&cards, self.format)?;
            }
            ShellCommand::Open(project_id) => {
                bnx_auth::require_session(&self.state)?;
                let report = self
                    .catalog
                    .report(&project_id, Utc::now())
                    .with_context(|| format!("cannot open '{project_id}'"))?;
                self.state.open(&project_id)?;
                self.report = Some(report);
                self.show()?;
            }
            ShellCommand::Show => self.show()?,
            ShellCommand::Export(dir) => {
                let (report, session) = self.open_report()?;
                let out_dir = dir.unwrap_or_else(|| self.config.report.output_dir.clone());
                let outcome = export::export(
                    report.clone(),
                    session.clone(),
                    self.config.report.clone(),
                    PathBuf::from(out_dir),
                )
                .await?;
                output(&outcome, self.format)?;
            }
            ShellCommand::Back => {
                self.state.back()?;
                self.report = None;
            }
            ShellCommand::Logout => {
                let session = bnx_auth::sign_out(&mut self.state)?;
                self.report = None;
                println!("Au revoir, {}.", session.display_name);
            }
        }
        Ok(Flow::Continue)
    }

    fn show(&self) -> anyhow::Result<()> {
        let (report, session) = self.open_report()?;
        show::print(report, session, self.format)
    }

    fn open_report(&self) -> anyhow::Result<(&Report, &Session)> {
        let session = bnx_auth::require_session(&self.state)?;
        let report = self
            .report
            .as_ref()
            .context("no report open: run `open <id>` first")?;
        Ok((report, session))
    }
}

/// Handle `bnx shell`: read commands from stdin until `quit` or EOF.
pub async fn handle(config: &BnxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut shell = Shell::new(config, flags.format);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !flags.quiet {
        println!("BioNext: tapez `help` pour la liste des commandes.");
    }

    loop {
        print!("{}", shell.prompt());
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read from stdin")? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(error) => {
                eprintln!("{error}");
                continue;
            }
        };

        match shell.execute(command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(error) => eprintln!("{error:#}"),
        }
    }

    Ok(())
}
