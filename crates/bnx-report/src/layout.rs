//! Backend-neutral page content produced by the paginator.
//!
//! Coordinates are millimetres from the top-left corner of the page. Text `y`
//! is the baseline. The renderer flips the axis for PDF.

use bnx_core::color::Color;

use crate::metrics::{FontStyle, PT_PER_MM, text_width_mm};

/// Helvetica ascender and descender as fractions of the font size.
const ASCENT: f32 = 0.718;
const DESCENT: f32 = 0.207;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        color: Color,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Color,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        color: Color,
        /// Stroke width in millimetres.
        thickness: f32,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Color,
    },
}

/// Axis-aligned box `(left, top, right, bottom)`.
pub type Bounds = (f32, f32, f32, f32);

impl DrawOp {
    /// Extent of the op on the page. Text uses the font's ascender and descender.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Text {
                x,
                y,
                size,
                style,
                text,
                ..
            } => {
                let size_mm = size / PT_PER_MM;
                (
                    *x,
                    y - ASCENT * size_mm,
                    x + text_width_mm(text, *size, *style),
                    y + DESCENT * size_mm,
                )
            }
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => (*x, *y, x + width, y + height),
            Self::Polyline { points, .. } | Self::Polygon { points, .. } => points.iter().fold(
                (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
                |(l, t, r, b), &(x, y)| (l.min(x), t.min(y), r.max(x), b.max(y)),
            ),
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text strings in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::text)
    }

    /// Ops whose text equals `needle`.
    pub fn find_text<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a DrawOp> {
        self.ops.iter().filter(move |op| op.text() == Some(needle))
    }
}

/// Every page of a laid-out report, footers included.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text of the document, page after page.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(Page::texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_bounds_use_baseline() {
        let op = DrawOp::Text {
            x: 20.0,
            y: 100.0,
            size: 10.0,
            style: FontStyle::Regular,
            color: Color::BLACK,
            text: "Limitations".into(),
        };
        let (left, top, right, bottom) = op.bounds();
        assert_eq!(left, 20.0);
        assert!(top < 100.0 && bottom > 100.0);
        assert!(right > left);
    }

    #[test]
    fn polygon_bounds_cover_points() {
        let op = DrawOp::Polygon {
            points: vec![(1.0, 5.0), (4.0, 2.0), (3.0, 8.0)],
            fill: Color::WHITE,
        };
        assert_eq!(op.bounds(), (1.0, 2.0, 4.0, 8.0));
    }
}
