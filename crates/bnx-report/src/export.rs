//! Writes a rendered report next to its final name and moves it into place.
//!
//! The bytes go to a temporary file in the target directory first. It is
//! renamed to the final name only once fully written, so a failed export never
//! leaves a partial PDF behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use bnx_config::ReportConfig;
use bnx_core::entities::{Report, Session};

use crate::error::ReportError;
use crate::filename::export_file_name;
use crate::layout::DocumentLayout;
use crate::paginator::paginate;
use crate::render::render_pdf;

/// What `report export` prints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportOutcome {
    pub file: PathBuf,
    pub pages: usize,
    pub bytes: usize,
}

/// A laid-out and rendered report, not yet on disk.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub file_name: String,
    pub layout: DocumentLayout,
    pub bytes: Vec<u8>,
}

/// Lay out and render `report` in memory.
pub fn build_pdf(
    report: &Report,
    session: &Session,
    config: &ReportConfig,
) -> Result<RenderedReport, ReportError> {
    let layout = paginate(report, session, config);
    let title = format!("{} - {}", config.product_label, report.project.title);
    let bytes = render_pdf(&layout, &title)?;
    let file_name = export_file_name(
        &config.file_prefix,
        &report.project.title,
        report.generated_at.date_naive(),
    );
    Ok(RenderedReport {
        file_name,
        layout,
        bytes,
    })
}

/// Render `report` and write it to `out_dir`.
pub fn export_report(
    report: &Report,
    session: &Session,
    config: &ReportConfig,
    out_dir: &Path,
) -> Result<ExportOutcome, ReportError> {
    let rendered = build_pdf(report, session, config)?;
    let target = out_dir.join(&rendered.file_name);
    write_atomically(out_dir, &target, &rendered.bytes)?;

    tracing::info!(
        file = %target.display(),
        pages = rendered.layout.page_count(),
        bytes = rendered.bytes.len(),
        "report exported"
    );
    Ok(ExportOutcome {
        file: target,
        pages: rendered.layout.page_count(),
        bytes: rendered.bytes.len(),
    })
}

fn write_atomically(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".bnx-export-")
        .suffix(".pdf.part")
        .tempfile_in(dir)
        .map_err(|e| ReportError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| ReportError::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| ReportError::io(tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| ReportError::io(target, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_leaves_only_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.pdf");
        write_atomically(dir.path(), &target, b"%PDF-1.3").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["out.pdf".to_string()]);
        assert_eq!(fs::read(&target).unwrap(), b"%PDF-1.3");
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let target = nested.join("out.pdf");
        write_atomically(&nested, &target, b"x").unwrap();
        assert!(target.exists());
    }
}
