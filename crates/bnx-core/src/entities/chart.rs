use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::enums::ChartKind;

/// Declarative chart description. Carries no computation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Category labels (x axis for bar/line, slices for pie).
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    /// Axis titles `(x, y)`, only drawn for scatter charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_titles: Option<(String, String)>,
}

/// One labelled dataset of a chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: SeriesData,
    pub fill: SeriesFill,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
}

/// Plain values (one per label) or `(x, y)` points for scatter charts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Points(Vec<XyPoint>),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

/// A single colour for the series or one colour per data point.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum SeriesFill {
    Uniform(Color),
    PerPoint(Vec<Color>),
}

impl ChartSpec {
    /// Largest value across all series (y for points).
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|series| series.data.y_values())
            .fold(0.0_f64, f64::max)
    }
}

impl Series {
    /// Colour of the `index`-th data point.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        match &self.fill {
            SeriesFill::Uniform(color) => *color,
            SeriesFill::PerPoint(colors) if colors.is_empty() => Color::hex(0x2563EB),
            SeriesFill::PerPoint(colors) => colors[index % colors.len()],
        }
    }

    /// Colour used for strokes and legend swatches.
    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.border.unwrap_or_else(|| self.color_at(0))
    }
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Points(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values for bar/line/pie; the y coordinate for points.
    #[must_use]
    pub fn y_values(&self) -> Vec<f64> {
        match self {
            Self::Values(values) => values.clone(),
            Self::Points(points) => points.iter().map(|p| p.y).collect(),
        }
    }
}
