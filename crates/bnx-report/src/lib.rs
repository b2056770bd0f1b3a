//! # bnx-report
//!
//! PDF export of a BioNext report.
//!
//! - [`paginate`] lays a [`Report`](bnx_core::entities::Report) onto pages and
//!   stamps the footers.
//! - [`render_pdf`] turns the layout into PDF bytes with `printpdf`'s
//!   built-in Helvetica fonts.
//! - [`export_report`] does both and writes the file atomically under its
//!   `<prefix>_<title>_<date>.pdf` name.

pub mod chart;
pub mod error;
pub mod export;
pub mod filename;
pub mod layout;
pub mod metrics;
pub mod paginator;
pub mod render;
pub mod wrap;

pub use error::ReportError;
pub use export::{ExportOutcome, RenderedReport, build_pdf, export_report};
pub use filename::{export_file_name, sanitize_title};
pub use layout::{DocumentLayout, DrawOp, Page};
pub use paginator::paginate;
pub use render::render_pdf;
pub use wrap::wrap_text;
