//! PDF report configuration: page geometry, break policy, and legacy thresholds.
//!
//! All lengths are millimetres measured from the top-left corner of the page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How the paginator decides that a block needs a fresh page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakPolicy {
    /// Compare the measured block height with the space left above the footer.
    #[default]
    Measured,
    /// Per-block lookahead constants from [`BreakThresholds`].
    Legacy,
}

impl BreakPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Measured => "measured",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for BreakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PageGeometry {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    /// Left and right margin.
    #[serde(default = "default_margin")]
    pub margin: f32,
    /// Cursor reset position on continuation pages.
    #[serde(default = "default_margin")]
    pub margin_top: f32,
    /// Gap kept between content and the footer band.
    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f32,
    /// Coloured band at the top of page 1 only.
    #[serde(default = "default_title_band")]
    pub title_band_height: f32,
    #[serde(default = "default_footer")]
    pub footer_height: f32,
}

const fn default_width() -> f32 {
    210.0
}
const fn default_height() -> f32 {
    297.0
}
const fn default_margin() -> f32 {
    20.0
}
const fn default_margin_bottom() -> f32 {
    5.0
}
const fn default_title_band() -> f32 {
    30.0
}
const fn default_footer() -> f32 {
    20.0
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            margin_top: default_margin(),
            margin_bottom: default_margin_bottom(),
            title_band_height: default_title_band(),
            footer_height: default_footer(),
        }
    }
}

impl PageGeometry {
    /// Wrap width for body text.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest baseline a content line may use.
    #[must_use]
    pub fn content_bottom(&self) -> f32 {
        self.height - self.footer_height - self.margin_bottom
    }

    /// Usable height of a continuation page.
    #[must_use]
    pub fn usable_height(&self) -> f32 {
        self.content_bottom() - self.margin_top
    }
}

/// Legacy lookahead constants, each measured upwards from the page bottom.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BreakThresholds {
    #[serde(default = "thresholds::summary")]
    pub summary: f32,
    #[serde(default = "thresholds::findings_heading")]
    pub findings_heading: f32,
    #[serde(default = "thresholds::finding_item")]
    pub finding_item: f32,
    #[serde(default = "thresholds::methodology_heading")]
    pub methodology_heading: f32,
    #[serde(default = "thresholds::limitations_heading")]
    pub limitations_heading: f32,
    #[serde(default = "thresholds::limitation_item")]
    pub limitation_item: f32,
    #[serde(default = "thresholds::chart")]
    pub chart: f32,
}

mod thresholds {
    pub(super) const fn summary() -> f32 {
        30.0
    }
    pub(super) const fn findings_heading() -> f32 {
        50.0
    }
    pub(super) const fn finding_item() -> f32 {
        20.0
    }
    pub(super) const fn methodology_heading() -> f32 {
        40.0
    }
    pub(super) const fn limitations_heading() -> f32 {
        30.0
    }
    pub(super) const fn limitation_item() -> f32 {
        15.0
    }
    pub(super) const fn chart() -> f32 {
        100.0
    }
}

impl Default for BreakThresholds {
    fn default() -> Self {
        Self {
            summary: thresholds::summary(),
            findings_heading: thresholds::findings_heading(),
            finding_item: thresholds::finding_item(),
            methodology_heading: thresholds::methodology_heading(),
            limitations_heading: thresholds::limitations_heading(),
            limitation_item: thresholds::limitation_item(),
            chart: thresholds::chart(),
        }
    }
}

impl BreakThresholds {
    fn entries(&self) -> [(&'static str, f32); 7] {
        [
            ("summary", self.summary),
            ("findings_heading", self.findings_heading),
            ("finding_item", self.finding_item),
            ("methodology_heading", self.methodology_heading),
            ("limitations_heading", self.limitations_heading),
            ("limitation_item", self.limitation_item),
            ("chart", self.chart),
        ]
    }
}

/// Space a chart title takes above the plot frame.
const CHART_TITLE_ROOM: f32 = 10.0;

fn default_product_label() -> String {
    "BioNext Research".to_string()
}
fn default_subtitle() -> String {
    "Rapport Scientifique".to_string()
}
fn default_file_prefix() -> String {
    "BioNext".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
const fn default_include_charts() -> bool {
    true
}
const fn default_chart_height() -> f32 {
    70.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Product name in the title band and footer.
    #[serde(default = "default_product_label")]
    pub product_label: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// First segment of exported file names.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Directory exported PDFs are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default)]
    pub break_policy: BreakPolicy,

    /// Draw chart specs into the PDF as vector graphics.
    #[serde(default = "default_include_charts")]
    pub include_charts: bool,

    /// Height of a chart's plot frame.
    #[serde(default = "default_chart_height")]
    pub chart_height: f32,

    #[serde(default)]
    pub page: PageGeometry,

    #[serde(default)]
    pub thresholds: BreakThresholds,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            product_label: default_product_label(),
            subtitle: default_subtitle(),
            file_prefix: default_file_prefix(),
            output_dir: default_output_dir(),
            break_policy: BreakPolicy::default(),
            include_charts: default_include_charts(),
            chart_height: default_chart_height(),
            page: PageGeometry::default(),
            thresholds: BreakThresholds::default(),
        }
    }
}

impl ReportConfig {
    /// Reject geometry that leaves no room for content.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let page = &self.page;
        let lengths = [
            ("report.page.width", page.width),
            ("report.page.height", page.height),
            ("report.page.margin", page.margin),
            ("report.page.margin_top", page.margin_top),
            ("report.page.margin_bottom", page.margin_bottom),
            ("report.page.title_band_height", page.title_band_height),
            ("report.page.footer_height", page.footer_height),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(field, "must be a non-negative length"));
            }
        }

        // List items are indented 5 mm and keep 5 mm on the right.
        if page.content_width() <= 10.0 {
            return Err(ConfigError::invalid(
                "report.page.margin",
                format!(
                    "margins leave {:.1} mm of text width on a {:.1} mm page",
                    page.content_width(),
                    page.width
                ),
            ));
        }

        if page.usable_height() <= 0.0 || page.content_bottom() <= page.title_band_height {
            return Err(ConfigError::invalid(
                "report.page.height",
                "no vertical space left between the top margin and the footer",
            ));
        }

        if !self.chart_height.is_finite() || self.chart_height <= 0.0 {
            return Err(ConfigError::invalid(
                "report.chart_height",
                "must be a positive length",
            ));
        }
        if self.include_charts && self.chart_height + CHART_TITLE_ROOM > page.usable_height() {
            return Err(ConfigError::invalid(
                "report.chart_height",
                format!(
                    "{:.1} mm plus its title does not fit in {:.1} mm of usable page height",
                    self.chart_height,
                    page.usable_height()
                ),
            ));
        }

        for (name, value) in self.thresholds.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    &format!("report.thresholds.{name}"),
                    "must be a non-negative length",
                ));
            }
        }

        if self.file_prefix.trim().is_empty() {
            return Err(ConfigError::invalid("report.file_prefix", "must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a4_layout() {
        let config = ReportConfig::default();
        assert_eq!(config.page.width, 210.0);
        assert_eq!(config.page.height, 297.0);
        assert_eq!(config.page.content_width(), 170.0);
        assert_eq!(config.page.content_bottom(), 272.0);
        assert_eq!(config.break_policy, BreakPolicy::Measured);
        assert!(config.include_charts);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn legacy_thresholds_have_documented_defaults() {
        let t = BreakThresholds::default();
        assert_eq!(
            [
                t.summary,
                t.findings_heading,
                t.finding_item,
                t.methodology_heading,
                t.limitations_heading,
                t.limitation_item,
            ],
            [30.0, 50.0, 20.0, 40.0, 30.0, 15.0]
        );
    }

    #[test]
    fn rejects_margins_wider_than_page() {
        let mut config = ReportConfig::default();
        config.page.margin = 100.0;
        let err = config.validate().expect_err("should reject");
        assert!(err.to_string().contains("report.page.margin"));
    }

    #[test]
    fn rejects_footer_swallowing_page() {
        let mut config = ReportConfig::default();
        config.page.footer_height = 290.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_threshold() {
        let mut config = ReportConfig::default();
        config.thresholds.finding_item = -1.0;
        let err = config.validate().expect_err("should reject");
        assert!(err.to_string().contains("report.thresholds.finding_item"));
    }

    #[test]
    fn oversized_chart_only_matters_when_charts_are_drawn() {
        let mut config = ReportConfig::default();
        config.chart_height = 400.0;
        assert!(config.validate().is_err());
        config.include_charts = false;
        assert!(config.validate().is_ok());
    }
}
