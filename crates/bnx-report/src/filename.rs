//! Export file names: `<prefix>_<sanitized-title>_<YYYY-MM-DD>.pdf`.

use chrono::NaiveDate;

/// Replace each run of characters outside `[A-Za-z0-9]` with one `_` and trim
/// `_` from both ends. Falls back to `rapport` when nothing is left.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "rapport".to_string()
    } else {
        trimmed.to_string()
    }
}

#[must_use]
pub fn export_file_name(prefix: &str, title: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.pdf",
        sanitize_title(prefix),
        sanitize_title(title),
        date.format("%Y-%m-%d")
    )
}
