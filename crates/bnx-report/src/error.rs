use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The PDF backend rejected the document.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("export I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The layout pass could not place content.
    #[error("layout error: {0}")]
    Layout(String),
}

impl ReportError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
