//! Vector drawing of chart specs into a fixed frame.
//!
//! Every op [`draw_chart`] returns lies inside the frame it was given: labels
//! that do not fit are shortened and text is clamped to the frame edges.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bnx_core::color::Color;
use bnx_core::entities::{ChartSpec, Series, SeriesData};
use bnx_core::enums::ChartKind;

use crate::layout::DrawOp;
use crate::metrics::{FontStyle, to_winansi, text_width_mm};
use crate::wrap::fit_label;

const LABEL_SIZE: f32 = 6.0;
const LEGEND_ROW: f32 = 4.0;
const SWATCH: f32 = 2.5;
const LEGEND_GAP: f32 = 4.0;
/// Legend labels are never shortened below this width.
const MIN_LEGEND_LABEL: f32 = 8.0;
const TICKS: u8 = 4;
const MARKER: f32 = 1.2;
/// Largest arc step used to approximate pie wedges.
const ARC_STEP: f32 = PI / 36.0;

const AXIS: Color = Color::rgb(148, 163, 184);
const GRID: Color = Color::rgb(226, 232, 240);
const LABEL: Color = Color::rgb(100, 116, 139);

/// Rectangle a chart is drawn into, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `(left, top, right, bottom)` lies inside the frame.
    #[must_use]
    pub fn contains(&self, (left, top, right, bottom): (f32, f32, f32, f32)) -> bool {
        const EPS: f32 = 1e-3;
        left >= self.x - EPS
            && top >= self.y - EPS
            && right <= self.right() + EPS
            && bottom <= self.bottom() + EPS
    }
}

/// Plot region inside the frame.
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Plot {
    fn width(&self) -> f32 {
        self.right - self.left
    }

    fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Draw `spec` inside `frame`: plot, axes, labels, and a legend row at the bottom.
#[must_use]
pub fn draw_chart(spec: &ChartSpec, frame: Frame) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let legend_top = legend(spec, frame, &mut ops);

    match spec.kind {
        ChartKind::Bar | ChartKind::Line => category_chart(spec, frame, legend_top, &mut ops),
        ChartKind::Pie => pie_chart(spec, frame, legend_top, &mut ops),
        ChartKind::Scatter => scatter_chart(spec, frame, legend_top, &mut ops),
    }

    tracing::trace!(title = %spec.title, ops = ops.len(), "chart drawn");
    ops
}

// ---------------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------------

/// Lay out legend entries in rows from the bottom of the frame. Returns the
/// top of the legend area.
fn legend(spec: &ChartSpec, frame: Frame, ops: &mut Vec<DrawOp>) -> f32 {
    let entries: Vec<(String, Color)> = match spec.kind {
        ChartKind::Pie => spec.series.first().map_or_else(Vec::new, |series| {
            spec.labels
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), series.color_at(i)))
                .collect()
        }),
        ChartKind::Bar | ChartKind::Line | ChartKind::Scatter => spec
            .series
            .iter()
            .map(|series| (series.label.clone(), series.stroke_color()))
            .collect(),
    };

    // Keep at least half of the frame for the plot.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_rows = ((frame.height / 2.0) / LEGEND_ROW).floor().max(0.0) as usize;

    // Shorter labels pack more entries per row; shrink them before dropping any.
    let mut max_label = frame.width - SWATCH - 1.0;
    let mut rows = legend_rows(&entries, max_label, frame.width);
    while rows.len() > max_rows && max_label > MIN_LEGEND_LABEL {
        max_label = (max_label * 0.75).max(MIN_LEGEND_LABEL);
        rows = legend_rows(&entries, max_label, frame.width);
    }
    if rows.len() > max_rows {
        let dropped: usize = rows[max_rows..].iter().map(Vec::len).sum();
        tracing::debug!(
            title = %spec.title,
            entries = entries.len(),
            dropped,
            "legend entries dropped"
        );
        rows.truncate(max_rows);
    }

    #[allow(clippy::cast_precision_loss)]
    let legend_top = frame.bottom() - rows.len() as f32 * LEGEND_ROW;
    for (index, row) in rows.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let gaps = LEGEND_GAP * row.len().saturating_sub(1) as f32;
        let total: f32 = row.iter().map(|(_, _, w)| w).sum::<f32>() + gaps;
        let mut x = frame.x + ((frame.width - total) / 2.0).max(0.0);
        #[allow(clippy::cast_precision_loss)]
        let row_top = legend_top + index as f32 * LEGEND_ROW;
        for (label, color, width) in row {
            ops.push(DrawOp::Rect {
                x,
                y: row_top + 0.75,
                width: SWATCH,
                height: SWATCH,
                fill: color.over_white(),
            });
            ops.push(text_op(x + SWATCH + 1.0, row_top + 3.0, label.clone(), LABEL));
            x += width + LEGEND_GAP;
        }
    }
    legend_top
}

type LegendRow = Vec<(String, Color, f32)>;

/// Pack entries left to right into rows no wider than `row_limit`, each
/// label shortened to `max_label`.
fn legend_rows(entries: &[(String, Color)], max_label: f32, row_limit: f32) -> Vec<LegendRow> {
    let mut rows: Vec<LegendRow> = vec![Vec::new()];
    let mut row_width = 0.0;
    for (label, color) in entries {
        let label = fit_label(&to_winansi(label), max_label, LABEL_SIZE, FontStyle::Regular);
        let entry_width = SWATCH + 1.0 + text_width_mm(&label, LABEL_SIZE, FontStyle::Regular);
        if row_width > 0.0 && row_width + LEGEND_GAP + entry_width > row_limit {
            rows.push(Vec::new());
            row_width = 0.0;
        }
        if row_width > 0.0 {
            row_width += LEGEND_GAP;
        }
        row_width += entry_width;
        if let Some(row) = rows.last_mut() {
            row.push((label, *color, entry_width));
        }
    }
    rows.retain(|row| !row.is_empty());
    rows
}

// ---------------------------------------------------------------------------
// Bar and line
// ---------------------------------------------------------------------------

fn category_chart(spec: &ChartSpec, frame: Frame, legend_top: f32, ops: &mut Vec<DrawOp>) {
    let max = nice_ceiling(spec.max_value());
    let ticks: Vec<(f32, String)> = (0..=TICKS)
        .map(|k| {
            let fraction = f32::from(k) / f32::from(TICKS);
            (fraction, tick_label(f64::from(fraction) * max))
        })
        .collect();
    let gutter = ticks
        .iter()
        .map(|(_, label)| text_width_mm(label, LABEL_SIZE, FontStyle::Regular))
        .fold(0.0_f32, f32::max)
        + 1.5;

    let plot = Plot {
        left: frame.x + gutter,
        top: frame.y + 3.0,
        right: frame.right() - 1.0,
        bottom: legend_top - 5.0,
    };
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    value_axis(&plot, frame, &ticks, ops);
    axes(&plot, ops);

    let count = spec.labels.len().max(max_points(&spec.series)).max(1);
    #[allow(clippy::cast_precision_loss)]
    let slot = plot.width() / count as f32;
    for (index, label) in spec.labels.iter().enumerate() {
        let label = fit_label(&to_winansi(label), slot - 1.0, LABEL_SIZE, FontStyle::Regular);
        let center = slot_center(&plot, slot, index);
        ops.push(centered_text(center, plot.bottom + 3.5, label, frame));
    }

    let y_of = |value: f64| -> f32 {
        #[allow(clippy::cast_possible_truncation)]
        let ratio = (value.max(0.0) / max).min(1.0) as f32;
        plot.bottom - ratio * plot.height()
    };

    if matches!(spec.kind, ChartKind::Bar) {
        #[allow(clippy::cast_precision_loss)]
        let bar = slot * 0.7 / spec.series.len().max(1) as f32;
        for (s, series) in spec.series.iter().enumerate() {
            for (i, value) in series.data.y_values().into_iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let x = plot.left + slot * (i as f32 + 0.15) + bar * s as f32;
                let top = y_of(value);
                ops.push(DrawOp::Rect {
                    x,
                    y: top,
                    width: bar * 0.9,
                    height: plot.bottom - top,
                    fill: series.color_at(i).over_white(),
                });
            }
        }
        return;
    }

    for series in &spec.series {
        let points: Vec<(f32, f32)> = series
            .data
            .y_values()
            .into_iter()
            .enumerate()
            .map(|(i, value)| (slot_center(&plot, slot, i), y_of(value)))
            .collect();
        let stroke = series.stroke_color().over_white();
        if points.len() > 1 {
            ops.push(DrawOp::Polyline {
                points: points.clone(),
                color: stroke,
                thickness: 0.5,
            });
        }
        for (x, y) in points {
            ops.push(marker(x, y, stroke));
        }
    }
}

fn slot_center(plot: &Plot, slot: f32, index: usize) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let offset = (index as f32 + 0.5) * slot;
    plot.left + offset
}

fn max_points(series: &[Series]) -> usize {
    series.iter().map(|s| s.data.len()).max().unwrap_or(0)
}

/// Grid lines and value labels left of the plot.
fn value_axis(plot: &Plot, frame: Frame, ticks: &[(f32, String)], ops: &mut Vec<DrawOp>) {
    for (fraction, label) in ticks {
        let y = plot.bottom - fraction * plot.height();
        ops.push(DrawOp::Polyline {
            points: vec![(plot.left, y), (plot.right, y)],
            color: GRID,
            thickness: 0.2,
        });
        let width = text_width_mm(label, LABEL_SIZE, FontStyle::Regular);
        let x = (plot.left - 1.0 - width).max(frame.x);
        ops.push(text_op(x, y + 1.0, label.clone(), LABEL));
    }
}

fn axes(plot: &Plot, ops: &mut Vec<DrawOp>) {
    ops.push(DrawOp::Polyline {
        points: vec![
            (plot.left, plot.top),
            (plot.left, plot.bottom),
            (plot.right, plot.bottom),
        ],
        color: AXIS,
        thickness: 0.3,
    });
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

fn pie_chart(spec: &ChartSpec, frame: Frame, legend_top: f32, ops: &mut Vec<DrawOp>) {
    let Some(series) = spec.series.first() else {
        return;
    };
    let values = series.data.y_values();
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return;
    }

    let area_top = frame.y + 1.0;
    let area_bottom = legend_top - 1.0;
    let radius = (frame.width.min(area_bottom - area_top) / 2.0) - 0.5;
    if radius <= 0.0 {
        return;
    }
    let (cx, cy) = (frame.x + frame.width / 2.0, (area_top + area_bottom) / 2.0);

    let mut start = -FRAC_PI_2;
    for (index, value) in values.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        #[allow(clippy::cast_possible_truncation)]
        let sweep = (value / total) as f32 * TAU;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (sweep / ARC_STEP).ceil().max(2.0) as u32;
        let mut points = vec![(cx, cy)];
        for step in 0..=steps {
            #[allow(clippy::cast_precision_loss)]
            let angle = start + sweep * step as f32 / steps as f32;
            points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
        }
        ops.push(DrawOp::Polygon {
            points,
            fill: series.color_at(index).over_white(),
        });
        start += sweep;
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

fn scatter_chart(spec: &ChartSpec, frame: Frame, legend_top: f32, ops: &mut Vec<DrawOp>) {
    let points: Vec<(f64, f64)> = spec.series.iter().flat_map(xy_points).collect();
    let x_max = nice_ceiling(points.iter().map(|p| p.0).fold(0.0, f64::max));
    let y_max = nice_ceiling(points.iter().map(|p| p.1).fold(0.0, f64::max));

    let y_ticks: Vec<(f32, String)> = (0..=TICKS)
        .map(|k| {
            let fraction = f32::from(k) / f32::from(TICKS);
            (fraction, tick_label(f64::from(fraction) * y_max))
        })
        .collect();
    let gutter = y_ticks
        .iter()
        .map(|(_, label)| text_width_mm(label, LABEL_SIZE, FontStyle::Regular))
        .fold(0.0_f32, f32::max)
        + 1.5;

    let plot = Plot {
        left: frame.x + gutter,
        top: frame.y + 5.0,
        right: frame.right() - 2.0,
        bottom: legend_top - 9.0,
    };
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    value_axis(&plot, frame, &y_ticks, ops);
    axes(&plot, ops);

    for k in 0..=TICKS {
        let fraction = f32::from(k) / f32::from(TICKS);
        let x = plot.left + fraction * plot.width();
        ops.push(centered_text(
            x,
            plot.bottom + 3.5,
            tick_label(f64::from(fraction) * x_max),
            frame,
        ));
    }

    if let Some((x_title, y_title)) = &spec.axis_titles {
        let x_title = fit_label(&to_winansi(x_title), frame.width, LABEL_SIZE, FontStyle::Regular);
        ops.push(centered_text(
            plot.left + plot.width() / 2.0,
            plot.bottom + 7.5,
            x_title,
            frame,
        ));
        let y_title = fit_label(&to_winansi(y_title), frame.width, LABEL_SIZE, FontStyle::Regular);
        ops.push(centered_text(plot.left, frame.y + 2.5, y_title, frame));
    }

    for series in &spec.series {
        for (index, (x, y)) in xy_points(series).into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let (fx, fy) = ((x.max(0.0) / x_max).min(1.0) as f32, (y.max(0.0) / y_max).min(1.0) as f32);
            ops.push(marker(
                plot.left + fx * plot.width(),
                plot.bottom - fy * plot.height(),
                series.color_at(index).over_white(),
            ));
        }
    }
}

/// Scatter coordinates. Plain values are placed at their index.
fn xy_points(series: &Series) -> Vec<(f64, f64)> {
    match &series.data {
        SeriesData::Points(points) => points.iter().map(|p| (p.x, p.y)).collect(),
        SeriesData::Values(values) => values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                #[allow(clippy::cast_precision_loss)]
                let x = i as f64;
                (x, *v)
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn marker(x: f32, y: f32, fill: Color) -> DrawOp {
    DrawOp::Rect {
        x: x - MARKER / 2.0,
        y: y - MARKER / 2.0,
        width: MARKER,
        height: MARKER,
        fill,
    }
}

fn text_op(x: f32, y: f32, text: String, color: Color) -> DrawOp {
    DrawOp::Text {
        x,
        y,
        size: LABEL_SIZE,
        style: FontStyle::Regular,
        color,
        text,
    }
}

/// Label centred on `center`, shifted back inside the frame if needed.
fn centered_text(center: f32, baseline: f32, text: String, frame: Frame) -> DrawOp {
    let width = text_width_mm(&text, LABEL_SIZE, FontStyle::Regular);
    let x = (center - width / 2.0).min(frame.right() - width).max(frame.x);
    text_op(x, baseline, text, LABEL)
}

/// Shorten `text` with a trailing `..` until it is at most `max_width` wide.
/// Round `value` up to 1, 2, 2.5, or 5 times a power of ten.
fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(value.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use bnx_core::entities::{SeriesFill, XyPoint};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(423.0, 500.0)]
    #[case(100.0, 100.0)]
    #[case(62.0, 100.0)]
    #[case(17.1, 20.0)]
    #[case(22.0, 25.0)]
    #[case(0.0, 1.0)]
    fn rounds_axis_maximum(#[case] value: f64, #[case] expected: f64) {
        assert!((nice_ceiling(value) - expected).abs() < 1e-9);
    }

    #[test]
    fn pie_wedges_follow_values() {
        let spec = ChartSpec {
            kind: ChartKind::Pie,
            title: "t".into(),
            labels: vec!["a".into(), "b".into()],
            series: vec![Series {
                label: "s".into(),
                data: SeriesData::Values(vec![3.0, 1.0]),
                fill: SeriesFill::PerPoint(vec![Color::hex(0xEF4444), Color::hex(0x10B981)]),
                border: None,
            }],
            axis_titles: None,
        };
        let frame = Frame {
            x: 20.0,
            y: 50.0,
            width: 170.0,
            height: 70.0,
        };
        let ops = draw_chart(&spec, frame);
        let wedges: Vec<usize> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polygon { points, .. } => Some(points.len()),
                _ => None,
            })
            .collect();
        assert_eq!(wedges.len(), 2);
        // The larger wedge needs more arc steps.
        assert!(wedges[0] > wedges[1]);
    }

    #[test]
    fn scatter_draws_one_marker_per_point_and_axis_titles() {
        let spec = ChartSpec {
            kind: ChartKind::Scatter,
            title: "t".into(),
            labels: vec![],
            series: vec![Series {
                label: "Patients".into(),
                data: SeriesData::Points(vec![XyPoint { x: 30.0, y: 15.0 }, XyPoint { x: 5.0, y: 198.0 }]),
                fill: SeriesFill::Uniform(Color::hex(0xF59E0B)),
                border: None,
            }],
            axis_titles: Some(("Score MMSE".into(), "Tau".into())),
        };
        let frame = Frame {
            x: 20.0,
            y: 50.0,
            width: 170.0,
            height: 70.0,
        };
        let ops = draw_chart(&spec, frame);
        let markers = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { width, .. } if (*width - MARKER).abs() < f32::EPSILON))
            .count();
        assert_eq!(markers, 2);
        assert!(ops.iter().any(|op| op.text() == Some("Score MMSE")));
        assert!(ops.iter().all(|op| frame.contains(op.bounds())));
    }

    fn many_series(count: usize) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            title: "Suivi".into(),
            labels: vec!["M1".into(), "M2".into()],
            series: (0..count)
                .map(|i| Series {
                    label: format!("Cohorte de suivi longitudinal numéro {i}"),
                    data: SeriesData::Values(vec![1.0, 2.0]),
                    fill: SeriesFill::Uniform(Color::hex(0x3B82F6)),
                    border: None,
                })
                .collect(),
            axis_titles: None,
        }
    }

    fn short_frame() -> Frame {
        Frame {
            x: 20.0,
            y: 50.0,
            width: 170.0,
            height: 30.0,
        }
    }

    #[test]
    fn crowded_legend_shortens_labels_instead_of_dropping() {
        let frame = short_frame();
        let mut ops = Vec::new();
        let top = legend(&many_series(24), frame, &mut ops);

        let labels = ops.iter().filter(|op| op.text().is_some()).count();
        assert_eq!(labels, 24);
        assert!(top >= frame.y + frame.height / 2.0 - 1e-3);
        for op in &ops {
            assert!(frame.contains(op.bounds()), "{op:?} leaves the frame");
        }
        assert!(ops.iter().filter_map(DrawOp::text).all(|t| t.ends_with("..")));
    }

    #[test]
    fn legend_never_takes_more_than_half_the_frame() {
        let frame = short_frame();
        let mut ops = Vec::new();
        let top = legend(&many_series(200), frame, &mut ops);

        let labels = ops.iter().filter(|op| op.text().is_some()).count();
        assert!(labels > 0 && labels < 200, "{labels} labels");
        assert!(top >= frame.y + frame.height / 2.0 - 1e-3);
        for op in &ops {
            assert!(frame.contains(op.bounds()), "{op:?} leaves the frame");
        }

        let ops = draw_chart(&many_series(200), frame);
        for op in &ops {
            assert!(frame.contains(op.bounds()), "{op:?} leaves the frame");
        }
    }
}
