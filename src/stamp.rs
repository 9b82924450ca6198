//! Draws laid out tables onto PDF pages.
//!
//! [stamp_table] takes the pages produced by a [TableRenderer](crate::layout::TableRenderer)
//! and turns each of them into a [Page] of the document: every placement becomes a
//! stroked border with its text wrapped inside. No layout decisions are made here
//! beyond breaking a cell's text into the lines it was measured to need.
//!
//! ```no_run
//! use pdf_table_gen::layout::TableRenderer;
//! use pdf_table_gen::pagesize::{PageOrientation, A4};
//! use pdf_table_gen::{stamp_table, Document, Font, Mm, Table, TableConfig, TableStyle};
//!
//! let font = Font::load(std::fs::read("DejaVuSans.ttf").unwrap()).unwrap();
//! let mut doc = Document::default();
//! let font = doc.add_font(font);
//!
//! let table = Table::from_records(
//!     ["qty", "mpn"],
//!     [Mm(25.0), Mm(70.0)],
//!     vec![vec!["10", "BC547"]],
//! )
//! .unwrap();
//! let rendered = TableRenderer::new(&doc.fonts[font], TableConfig::default()).render(&table);
//!
//! stamp_table(&mut doc, &rendered, A4.landscape(), &TableStyle::new(font)).unwrap();
//! doc.write(std::fs::File::create("parts.pdf").unwrap()).unwrap();
//! ```

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::Font;
use crate::layout::{
    wrap_lines, CellKind, CellPlacement, Margins, PageLayout, RenderedTable, TextMetrics,
};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::{Mm, Pt};
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::Content;

/// How stamped tables look
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub body_font: Id<Font>,
    pub header_font: Id<Font>,
    pub text_colour: Colour,
    pub border_colour: Colour,
    pub border_width: Pt,
    /// Horizontal gap between a cell's border and its text
    pub inset: Pt,
    /// Margins written as each page's content box
    pub margins: Option<Margins>,
}

impl TableStyle {
    /// Black text and hairline borders, with the same font for header and body
    pub fn new(font: Id<Font>) -> TableStyle {
        TableStyle {
            body_font: font,
            header_font: font,
            text_colour: colours::BLACK,
            border_colour: colours::BLACK,
            border_width: Pt(0.5),
            inset: Mm(1.0).into(),
            margins: None,
        }
    }

    /// Set the header in a different font, usually a bold face
    pub fn with_header_font(mut self, font: Id<Font>) -> TableStyle {
        self.header_font = font;
        self
    }
}

/// One line of a cell's text. `x` is where the line starts and `baseline` where it
/// sits, both measured from the top-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLine {
    pub text: String,
    pub x: Pt,
    pub baseline: Pt,
}

/// Break the text of a placement into lines and position each line inside the
/// cell according to the cell's alignment. The lines share the cell's height
/// evenly, each one vertically centred in its share.
pub fn cell_lines<M: TextMetrics + ?Sized>(
    placement: &CellPlacement,
    metrics: &M,
    inset: Pt,
) -> Vec<CellLine> {
    let size = placement.font_size;
    let available = (placement.width - inset * 2.0).max(Pt(0.0));
    let lines = wrap_lines(&placement.text, available, size, metrics);
    if lines.is_empty() {
        return Vec::new();
    }

    // the estimate can fall short of the real wrap; squeeze rather than spill
    let spacing = placement.height / placement.lines_occupied.max(lines.len()) as f32;
    let ascent = metrics.ascent(size);
    let glyph_box = ascent - metrics.descent(size);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let width = metrics.width(&text, size);
            let x = match placement.alignment {
                crate::Alignment::Left => placement.x + inset,
                crate::Alignment::Center => placement.x + (placement.width - width) / 2.0,
                crate::Alignment::Right => placement.x + placement.width - inset - width,
            };
            let top = placement.y + spacing * i as f32;
            let baseline = top + (spacing - glyph_box) / 2.0 + ascent;
            CellLine { text, x, baseline }
        })
        .collect()
}

/// Border rectangles for every placement of a page
pub fn border_content(layout: &PageLayout, page_height: Pt, style: &TableStyle) -> Content {
    let mut content = Content::new();
    content.set_line_width(style.border_width.into());
    style.border_colour.set_stroke(&mut content);
    for p in layout.placements.iter() {
        let r = Rect::from_top_left(p.x, p.y, p.width, p.height, page_height);
        content.rect(r.x1.into(), r.y1.into(), r.width().into(), r.height().into());
    }
    content.stroke();
    content
}

fn stamp_page(
    fonts: &Arena<Font>,
    layout: &PageLayout,
    page_size: PageSize,
    style: &TableStyle,
) -> Result<Page, PDFError> {
    let mut page = Page::new(page_size, style.margins);
    let page_height = page.height();
    page.add_content(border_content(layout, page_height, style));

    let mut spans: Vec<SpanLayout> = Vec::new();
    for placement in layout.placements.iter() {
        let id = match placement.kind {
            CellKind::Header => style.header_font,
            CellKind::Body { .. } => style.body_font,
        };
        let font = fonts.get(id).ok_or(PDFError::FontMissing)?;

        for line in cell_lines(placement, font, style.inset) {
            spans.push(SpanLayout {
                text: line.text,
                font: SpanFont {
                    id,
                    size: placement.font_size,
                },
                colour: style.text_colour,
                coords: (line.x, page_height - line.baseline),
            });
        }
    }
    page.add_spans(spans);

    Ok(page)
}

/// Add one page to `document` for every page of `rendered`, returning the new
/// pages' ids in order.
pub fn stamp_table(
    document: &mut Document,
    rendered: &RenderedTable,
    page_size: PageSize,
    style: &TableStyle,
) -> Result<Vec<Id<Page>>, PDFError> {
    let mut ids = Vec::with_capacity(rendered.pages.len());
    for layout in rendered.pages.iter() {
        let page = stamp_page(&document.fonts, layout, page_size, style)?;
        ids.push(document.add_page(page));
    }
    tracing::debug!(pages = ids.len(), "stamped table onto document");
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::UniformMetrics;
    use crate::Alignment;
    use pretty_assertions::assert_eq;

    fn placement(text: &str, alignment: Alignment, lines_occupied: usize) -> CellPlacement {
        CellPlacement {
            page: 0,
            kind: CellKind::Body { row: 0 },
            column_index: 0,
            text: text.to_string(),
            x: Pt(100.0),
            y: Pt(50.0),
            width: Pt(60.0),
            height: Pt(24.0),
            lines_occupied,
            alignment,
            font_size: Pt(10.0),
        }
    }

    #[test]
    fn aligns_lines_inside_the_cell() {
        let m = UniformMetrics::default();
        let left = cell_lines(&placement("ab", Alignment::Left, 1), &m, Pt(2.0));
        let centre = cell_lines(&placement("ab", Alignment::Center, 1), &m, Pt(2.0));
        let right = cell_lines(&placement("ab", Alignment::Right, 1), &m, Pt(2.0));

        assert_eq!(left[0].x, Pt(102.0));
        assert_eq!(centre[0].x, Pt(125.0));
        assert_eq!(right[0].x, Pt(148.0));
    }

    #[test]
    fn shares_the_row_height_between_lines() {
        let m = UniformMetrics::default();
        // 56pt of room fits 11 characters
        let lines = cell_lines(&placement("aaaa bbbb cccc", Alignment::Left, 2), &m, Pt(2.0));
        assert_eq!(
            lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec!["aaaa bbbb", "cccc"]
        );
        // 12pt per line, a 10pt glyph box centred in each, ascent of 8pt
        assert!((lines[0].baseline.0 - 59.0).abs() < 1e-3);
        assert!((lines[1].baseline.0 - 71.0).abs() < 1e-3);
    }

    #[test]
    fn empty_cells_draw_nothing() {
        let m = UniformMetrics::default();
        assert!(cell_lines(&placement("", Alignment::Left, 1), &m, Pt(2.0)).is_empty());
    }

    #[test]
    fn draws_one_border_per_placement() {
        let layout = PageLayout {
            index: 0,
            placements: vec![
                placement("a", Alignment::Left, 1),
                placement("b", Alignment::Left, 1),
                placement("c", Alignment::Left, 1),
            ],
        };
        let style = TableStyle::new(id_arena::Arena::<Font>::new().next_id());
        let bytes = border_content(&layout, Pt(500.0), &style).finish();
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(text.matches(" re").count(), 3);
    }

    fn parts_table(rows: usize) -> crate::Table {
        crate::Table::from_records(
            ["qty", "mpn", "description"],
            [Mm(20.0), Mm(40.0), Mm(80.0)],
            (0..rows)
                .map(|i| vec![format!("{i}"), format!("MPN-{i:04}"), "resistor".to_string()])
                .collect::<Vec<_>>(),
        )
        .expect("rows match the header")
    }

    #[test]
    fn missing_fonts_add_no_pages() {
        let mut document = Document::default();
        let style = TableStyle::new(document.fonts.next_id());
        let rendered = crate::layout::TableRenderer::new(
            &UniformMetrics::default(),
            crate::TableConfig::default(),
        )
        .render(&parts_table(3));

        let result = stamp_table(&mut document, &rendered, crate::pagesize::A4, &style);
        assert!(matches!(result, Err(PDFError::FontMissing)));
        assert_eq!(document.page_count(), 0);
    }

    #[test]
    fn adds_one_page_per_layout() {
        let mut document = Document::default();
        let font = document.add_font(crate::font::tests::dejavu());
        let config = *crate::TableConfig::new().page_capacity(Pt(100.0));
        let rendered =
            crate::layout::TableRenderer::new(&document.fonts[font], config).render(&parts_table(40));
        assert!(rendered.pages.len() > 1);

        let ids = stamp_table(&mut document, &rendered, crate::pagesize::A4, &TableStyle::new(font))
            .expect("fonts are in the document");
        assert_eq!(ids.len(), rendered.pages.len());
        assert_eq!(document.page_count(), rendered.pages.len());
        assert_eq!(document.page_order, ids);

        let mut out: Vec<u8> = Vec::new();
        document.write(&mut out).expect("can write document");
        assert!(out.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains(&format!("/Count {}", ids.len())));
        assert!(text.contains("/FontFile2"));
    }
}
