//! Lays a [`Report`] out onto fixed-size pages.
//!
//! The first pass places the title band, the project header and each content
//! section top to bottom, opening a new page whenever a block would run into
//! the footer (see [`BreakPolicy`]). The second pass stamps every page with a
//! footer carrying the user's name and `Page i sur N`, once N is known.
//!
//! Every text block is wrapped with [`wrap_text`] once. The same lines are
//! used to measure the block and to draw it.

use bnx_config::{BreakPolicy, PageGeometry, ReportConfig};
use bnx_core::color::Color;
use bnx_core::entities::{Report, Session};
use bnx_core::format::{date_fr, group_thousands, percent, significance};

use crate::chart::{Frame, draw_chart};
use crate::layout::{DocumentLayout, DrawOp, Page};
use crate::metrics::{FontStyle, text_width_mm, to_winansi};
use crate::wrap::{fit_label, wrap_text};

const BAND: Color = Color::rgb(37, 99, 235);
const INFO: Color = Color::rgb(100, 116, 139);
const BODY: Color = Color::rgb(50, 50, 50);
const FINDING_BULLET: Color = Color::rgb(13, 148, 136);
const LIMITATION_BULLET: Color = Color::rgb(245, 158, 11);
const FOOTER_FILL: Color = Color::rgb(245, 245, 245);
const FOOTER_TEXT: Color = Color::rgb(100, 100, 100);

const TITLE_SIZE: f32 = 18.0;
const TITLE_LINE: f32 = 7.0;
const INFO_SIZE: f32 = 11.0;
const INFO_LINE: f32 = 5.0;
const HEADING_SIZE: f32 = 14.0;
const HEADING_ADVANCE: f32 = 10.0;
const BODY_SIZE: f32 = 10.0;
const BODY_LINE: f32 = 4.0;
const CHART_TITLE_SIZE: f32 = 12.0;
const CHART_TITLE_ADVANCE: f32 = 7.0;
const FOOTER_SIZE: f32 = 8.0;
/// Minimum space between the footer line and the page counter.
const FOOTER_GAP: f32 = 5.0;

/// List text is indented this far past the bullet.
const ITEM_INDENT: f32 = 5.0;
const ITEM_GAP: f32 = 2.0;
const PARAGRAPH_GAP: f32 = 15.0;
const SECTION_GAP: f32 = 10.0;

const EPS: f32 = 1e-3;

/// Per-block lookahead, used by [`BreakPolicy::Legacy`].
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    /// Never break before this block.
    None,
    /// Break if the cursor is below `page_height - threshold`.
    Cursor(f32),
    /// Break if the end of the block is below `page_height - threshold`.
    BlockEnd(f32),
}

/// A wrapped run of lines sharing one font.
struct TextBlock {
    lines: Vec<String>,
    x: f32,
    size: f32,
    style: FontStyle,
    color: Color,
    line_height: f32,
}

impl TextBlock {
    fn wrap(
        text: &str,
        x: f32,
        width: f32,
        size: f32,
        style: FontStyle,
        color: Color,
        line_height: f32,
    ) -> Self {
        Self {
            lines: wrap_text(&to_winansi(text), width, size, style),
            x,
            size,
            style,
            color,
            line_height,
        }
    }

    fn body(text: &str, x: f32, width: f32) -> Self {
        Self::wrap(text, x, width, BODY_SIZE, FontStyle::Regular, BODY, BODY_LINE)
    }

    #[allow(clippy::cast_precision_loss)]
    fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }
}

struct Paginator<'a> {
    config: &'a ReportConfig,
    page: PageGeometry,
    done: Vec<Page>,
    current: Page,
    cursor: f32,
}

impl<'a> Paginator<'a> {
    fn new(config: &'a ReportConfig) -> Self {
        Self {
            config,
            page: config.page,
            done: Vec::new(),
            current: Page::default(),
            cursor: config.page.title_band_height,
        }
    }

    fn push(&mut self, op: DrawOp) {
        self.current.ops.push(op);
    }

    fn text(&mut self, x: f32, y: f32, size: f32, style: FontStyle, color: Color, text: &str) {
        self.push(DrawOp::Text {
            x,
            y,
            size,
            style,
            color,
            text: to_winansi(text).into_owned(),
        });
    }

    fn at_top(&self) -> bool {
        self.cursor <= self.page.margin_top + EPS
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor + height <= self.page.content_bottom() + EPS
    }

    fn page_number(&self) -> usize {
        self.done.len() + 1
    }

    fn break_page(&mut self, before: &str) {
        tracing::debug!(
            page = self.page_number(),
            cursor = self.cursor,
            before,
            "page break"
        );
        self.done.push(std::mem::take(&mut self.current));
        self.cursor = self.page.margin_top;
    }

    /// Break before a block of `height` whose first line is `first_line` tall.
    ///
    /// Measured: break when the block does not fit in the space left. A block
    /// taller than an empty page only needs its first line to fit, the rest
    /// flows line by line.
    fn keep_together(&mut self, before: &str, height: f32, first_line: f32, lookahead: Lookahead) {
        let due = match self.config.break_policy {
            BreakPolicy::Measured => {
                let needed = if height <= self.page.usable_height() + EPS {
                    height
                } else {
                    first_line
                };
                !self.at_top() && !self.fits(needed)
            }
            BreakPolicy::Legacy => {
                let limit = self.page.height;
                match lookahead {
                    Lookahead::None => false,
                    Lookahead::Cursor(threshold) => self.cursor > limit - threshold,
                    Lookahead::BlockEnd(threshold) => self.cursor + height > limit - threshold,
                }
            }
        };
        if due {
            self.break_page(before);
        }
    }

    /// Move to a new page if one more line of `line_height` would reach the footer.
    fn ensure_line(&mut self, line_height: f32) {
        if !self.at_top() && !self.fits(line_height) {
            self.break_page("overflowing line");
        }
    }

    fn draw_block(&mut self, block: &TextBlock) {
        for line in &block.lines {
            self.ensure_line(block.line_height);
            self.push(DrawOp::Text {
                x: block.x,
                y: self.cursor,
                size: block.size,
                style: block.style,
                color: block.color,
                text: line.clone(),
            });
            self.cursor += block.line_height;
        }
    }

    fn heading(&mut self, label: &str, next: Option<&TextBlock>, lookahead: Lookahead) {
        let (next_height, next_line) = next.map_or((0.0, 0.0), |block| {
            (block.height(), block.line_height.min(block.height()))
        });
        self.keep_together(
            label,
            HEADING_ADVANCE + next_height,
            HEADING_ADVANCE + next_line,
            lookahead,
        );
        let margin = self.page.margin;
        let y = self.cursor;
        self.text(margin, y, HEADING_SIZE, FontStyle::Bold, Color::BLACK, label);
        self.cursor += HEADING_ADVANCE;
    }

    fn bullet_list(&mut self, label: &str, items: &[TextBlock], bullet: Color, lookahead: Lookahead) {
        for (index, item) in items.iter().enumerate() {
            self.keep_together(label, item.height(), item.line_height, lookahead);
            if item.lines.is_empty() {
                continue;
            }
            self.ensure_line(item.line_height);
            tracing::trace!(section = label, item = index, lines = item.lines.len(), "list item");
            let (margin, y) = (self.page.margin, self.cursor);
            self.text(margin, y, item.size, FontStyle::Regular, bullet, "•");
            self.draw_block(item);
            self.cursor += ITEM_GAP;
        }
    }

    fn items(&self, texts: &[String]) -> Vec<TextBlock> {
        let x = self.page.margin + ITEM_INDENT;
        let width = self.page.content_width() - 2.0 * ITEM_INDENT;
        texts.iter().map(|text| TextBlock::body(text, x, width)).collect()
    }

    // -----------------------------------------------------------------------
    // Sections
    // -----------------------------------------------------------------------

    fn title_band(&mut self) {
        let (width, band, margin) = (self.page.width, self.page.title_band_height, self.page.margin);
        self.push(DrawOp::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height: band,
            fill: BAND,
        });
        let product = self.config.product_label.clone();
        let subtitle = self.config.subtitle.clone();
        self.text(margin, band * 0.5, 20.0, FontStyle::Bold, Color::WHITE, &product);
        self.text(margin, band - 5.0, 12.0, FontStyle::Regular, Color::WHITE, &subtitle);
    }

    fn project_header(&mut self, report: &Report) {
        let (margin, width) = (self.page.margin, self.page.content_width());

        self.cursor = self.page.title_band_height + 15.0;
        let title = TextBlock::wrap(
            &report.project.title,
            margin,
            width,
            TITLE_SIZE,
            FontStyle::Bold,
            Color::BLACK,
            TITLE_LINE,
        );
        self.draw_block(&title);
        self.cursor += SECTION_GAP;

        let project = &report.project;
        let analysis = &report.analysis;
        let info = [
            format!("Description: {}", project.description),
            format!(
                "Échantillons: {} patients",
                group_thousands(u64::from(project.sample_size))
            ),
            format!("Date de completion: {}", date_fr(project.completion_date)),
            format!(
                "Significativité statistique: p = {}",
                significance(analysis.statistical_significance)
            ),
            format!("Niveau de confiance: {}", percent(analysis.confidence_level)),
        ];
        for line in &info {
            let block = TextBlock::wrap(
                line,
                margin,
                width,
                INFO_SIZE,
                FontStyle::Regular,
                INFO,
                INFO_LINE,
            );
            self.keep_together("project info", block.height(), INFO_LINE, Lookahead::None);
            self.draw_block(&block);
        }
        self.cursor += SECTION_GAP;
    }

    fn summary(&mut self, report: &Report) {
        let t = self.config.thresholds;
        let block = TextBlock::body(&report.analysis.summary, self.page.margin, self.page.content_width());

        self.heading("Synthèse de l'analyse", Some(&block), Lookahead::None);
        self.keep_together("summary", block.height(), BODY_LINE, Lookahead::BlockEnd(t.summary));
        self.draw_block(&block);
        self.cursor += PARAGRAPH_GAP;
    }

    fn findings(&mut self, report: &Report) {
        let t = self.config.thresholds;
        let items = self.items(&report.analysis.key_findings);

        self.heading(
            "Résultats clés",
            items.first(),
            Lookahead::Cursor(t.findings_heading),
        );
        self.bullet_list(
            "finding",
            &items,
            FINDING_BULLET,
            Lookahead::Cursor(t.finding_item),
        );
        self.cursor += SECTION_GAP;
    }

    fn charts(&mut self, report: &Report) {
        let t = self.config.thresholds;
        let (margin, width) = (self.page.margin, self.page.content_width());
        let chart_height = self.config.chart_height;

        for spec in &report.charts {
            let title = TextBlock::wrap(
                &spec.title,
                margin,
                width,
                CHART_TITLE_SIZE,
                FontStyle::Bold,
                Color::BLACK,
                CHART_TITLE_ADVANCE,
            );
            let block_height = title.height() + chart_height;
            self.keep_together(&spec.title, block_height, block_height, Lookahead::Cursor(t.chart));
            // A chart never straddles a page, whatever the policy.
            if !self.at_top() && !self.fits(block_height) {
                self.break_page(&spec.title);
            }

            self.draw_block(&title);
            // Only a title taller than a page can leave the chart short of room here.
            if !self.at_top() && !self.fits(chart_height) {
                self.break_page(&spec.title);
            }

            let frame = Frame {
                x: margin,
                y: self.cursor - 2.0,
                width,
                height: chart_height,
            };
            for op in draw_chart(spec, frame) {
                self.push(op);
            }
            self.cursor += chart_height + SECTION_GAP;
        }
    }

    fn methodology(&mut self, report: &Report) {
        let t = self.config.thresholds;
        let block = TextBlock::body(
            &report.analysis.methodology,
            self.page.margin,
            self.page.content_width(),
        );

        self.heading(
            "Méthodologie",
            Some(&block),
            Lookahead::Cursor(t.methodology_heading),
        );
        self.keep_together("methodology", block.height(), BODY_LINE, Lookahead::None);
        self.draw_block(&block);
        self.cursor += PARAGRAPH_GAP;
    }

    fn limitations(&mut self, report: &Report) {
        let t = self.config.thresholds;
        let items = self.items(&report.analysis.limitations);

        self.heading(
            "Limitations",
            items.first(),
            Lookahead::Cursor(t.limitations_heading),
        );
        self.bullet_list(
            "limitation",
            &items,
            LIMITATION_BULLET,
            Lookahead::Cursor(t.limitation_item),
        );
    }

    /// Close the last page and stamp every footer with the final page count.
    fn finish(mut self, session: &Session, report: &Report) -> DocumentLayout {
        self.done.push(std::mem::take(&mut self.current));
        let total = self.done.len();
        let page = self.page;
        let counter = |number: usize| format!("Page {number} sur {total}");
        let counter_width = text_width_mm(&counter(total), FOOTER_SIZE, FontStyle::Regular);
        let right = page.width - page.margin;
        let generated = footer_line(
            &date_fr(report.generated_at.date_naive()),
            &session.display_name,
            &self.config.product_label,
            right - page.margin - counter_width - FOOTER_GAP,
        );
        let baseline = page.height - page.footer_height / 2.0;

        for (index, sheet) in self.done.iter_mut().enumerate() {
            sheet.ops.push(DrawOp::Rect {
                x: 0.0,
                y: page.height - page.footer_height,
                width: page.width,
                height: page.footer_height,
                fill: FOOTER_FILL,
            });
            sheet.ops.push(DrawOp::Text {
                x: page.margin,
                y: baseline,
                size: FOOTER_SIZE,
                style: FontStyle::Regular,
                color: FOOTER_TEXT,
                text: generated.clone(),
            });
            let text = counter(index + 1);
            sheet.ops.push(DrawOp::Text {
                x: right - text_width_mm(&text, FOOTER_SIZE, FontStyle::Regular),
                y: baseline,
                size: FOOTER_SIZE,
                style: FontStyle::Regular,
                color: FOOTER_TEXT,
                text,
            });
        }

        DocumentLayout {
            width: page.width,
            height: page.height,
            pages: self.done,
        }
    }
}

/// `Généré le <date> par <name> - <product>`, at most `room` millimetres wide.
///
/// A long display name is shortened first so the date and product stay
/// readable; the whole line is cut only if that is not enough.
fn footer_line(date: &str, name: &str, product: &str, room: f32) -> String {
    let width = |text: &str| text_width_mm(text, FOOTER_SIZE, FontStyle::Regular);
    let prefix = to_winansi(&format!("Généré le {date} par ")).into_owned();
    let suffix = to_winansi(&format!(" - {product}")).into_owned();
    let name = to_winansi(name);

    let full = format!("{prefix}{name}{suffix}");
    if width(&full) <= room {
        return full;
    }
    let name_room = room - width(&prefix) - width(&suffix);
    let short = fit_label(&name, name_room, FOOTER_SIZE, FontStyle::Regular);
    tracing::debug!(name = %name, shortened = %short, "footer name shortened");
    fit_label(&format!("{prefix}{short}{suffix}"), room, FOOTER_SIZE, FontStyle::Regular)
}

/// Lay out `report` for `session` with the geometry and break policy in `config`.
#[must_use]
pub fn paginate(report: &Report, session: &Session, config: &ReportConfig) -> DocumentLayout {
    let mut paginator = Paginator::new(config);

    paginator.title_band();
    paginator.project_header(report);
    paginator.summary(report);
    paginator.findings(report);
    if config.include_charts {
        paginator.charts(report);
    }
    paginator.methodology(report);
    paginator.limitations(report);

    let layout = paginator.finish(session, report);
    tracing::debug!(
        project_id = %report.project.id,
        pages = layout.page_count(),
        policy = %config.break_policy,
        "report laid out"
    );
    layout
}
