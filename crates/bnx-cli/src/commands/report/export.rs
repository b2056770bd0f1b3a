use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;

use bnx_catalog::Catalog;
use bnx_config::{BnxConfig, ReportConfig};
use bnx_core::entities::{Report, Session};
use bnx_report::{ExportOutcome, export_report};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExportArgs;
use crate::commands::shared::session::login;
use crate::output::output;
use crate::progress::Progress;

/// The only message a failed export shows the user. Details go to the log.
pub const EXPORT_ALERT: &str = "Erreur lors de la génération du PDF. Veuillez réessayer.";

pub async fn handle(
    args: &ExportArgs,
    catalog: &Catalog,
    config: &BnxConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = login(&args.email, config)?;
    let report = catalog
        .report(&args.project_id, Utc::now())
        .with_context(|| format!("failed to assemble report for '{}'", args.project_id))?;

    let mut report_config = config.report.clone();
    if let Some(policy) = args.policy {
        report_config.break_policy = policy.into_policy();
    }
    if args.no_charts {
        report_config.include_charts = false;
    }
    let out_dir = args
        .out_dir
        .as_deref()
        .unwrap_or(&config.report.output_dir);

    let outcome = export(report, session, report_config, PathBuf::from(out_dir)).await?;
    output(&outcome, flags.format)
}

/// Lay out, render, and write the PDF off the async runtime.
///
/// Any failure is logged with its cause and surfaces as [`EXPORT_ALERT`].
pub async fn export(
    report: Report,
    session: Session,
    config: ReportConfig,
    out_dir: PathBuf,
) -> anyhow::Result<ExportOutcome> {
    let project_id = report.project.id.clone();
    let progress = Progress::spinner("Génération du PDF...");

    let joined =
        tokio::task::spawn_blocking(move || export_report(&report, &session, &config, &out_dir))
            .await;
    let result = match joined {
        Ok(result) => result.map_err(anyhow::Error::from),
        Err(error) => Err(anyhow::Error::from(error).context("pdf export task failed")),
    };

    match result {
        Ok(outcome) => {
            progress.finish_ok(&format!("PDF généré: {}", outcome.file.display()));
            Ok(outcome)
        }
        Err(error) => {
            progress.finish_err("Échec de la génération du PDF");
            tracing::error!(error = %format!("{error:#}"), project_id, "pdf export failed");
            Err(anyhow::anyhow!(EXPORT_ALERT))
        }
    }
}
