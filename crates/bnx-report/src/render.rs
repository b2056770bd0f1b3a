//! PDF backend: replays a [`DocumentLayout`] onto `printpdf` pages.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference,
    Point, Polygon, Rgb,
};

use bnx_core::color::Color;

use crate::error::ReportError;
use crate::layout::{DocumentLayout, DrawOp};
use crate::metrics::{FontStyle, PT_PER_MM};

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    const fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

fn pdf_error(err: impl std::fmt::Debug) -> ReportError {
    ReportError::Pdf(format!("{err:?}"))
}

/// Render `layout` to PDF bytes. `title` becomes the document title.
pub fn render_pdf(layout: &DocumentLayout, title: &str) -> Result<Vec<u8>, ReportError> {
    if layout.pages.is_empty() {
        return Err(ReportError::Layout("document has no pages".to_string()));
    }

    let (width, height) = (Mm(layout.width), Mm(layout.height));
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Layer 1");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for op in &page.ops {
            draw(&layer, &fonts, layout.height, op);
        }
    }

    let bytes = doc.save_to_bytes().map_err(pdf_error)?;
    tracing::debug!(pages = layout.page_count(), bytes = bytes.len(), "pdf rendered");
    Ok(bytes)
}

fn rgb(color: Color) -> PdfColor {
    let (r, g, b) = color.over_white().unit_rgb();
    PdfColor::Rgb(Rgb::new(r, g, b, None))
}

/// Layout coordinates grow downwards; PDF user space grows upwards.
fn point(page_height: f32, (x, y): (f32, f32)) -> (Point, bool) {
    (Point::new(Mm(x), Mm(page_height - y)), false)
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, page_height: f32, op: &DrawOp) {
    match op {
        DrawOp::Text {
            x,
            y,
            size,
            style,
            color,
            text,
        } => {
            layer.set_fill_color(rgb(*color));
            layer.use_text(text.clone(), *size, Mm(*x), Mm(page_height - y), fonts.get(*style));
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            let corners = [
                (*x, *y),
                (x + width, *y),
                (x + width, y + height),
                (*x, y + height),
            ];
            fill_polygon(layer, page_height, &corners, *fill);
        }
        DrawOp::Polygon { points, fill } => fill_polygon(layer, page_height, points, *fill),
        DrawOp::Polyline {
            points,
            color,
            thickness,
        } => {
            layer.set_outline_color(rgb(*color));
            layer.set_outline_thickness(thickness * PT_PER_MM);
            layer.add_line(Line {
                points: points.iter().map(|p| point(page_height, *p)).collect(),
                is_closed: false,
            });
        }
    }
}

fn fill_polygon(layer: &PdfLayerReference, page_height: f32, points: &[(f32, f32)], fill: Color) {
    layer.set_fill_color(rgb(fill));
    layer.add_polygon(Polygon {
        rings: vec![points.iter().map(|p| point(page_height, *p)).collect()],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}
