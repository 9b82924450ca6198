use super::cursor::{Advance, PageCursor};
use super::height::RowHeightCalculator;
use super::metrics::TextMetrics;
use super::wrap::{lines_needed, normalize_for};
use crate::config::TableConfig;
use crate::table::{Alignment, Column, Table};
use crate::units::Pt;

/// Which part of the table a placement belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellKind {
    Header,
    /// A data cell from the row at index `row` of the table
    Body { row: usize },
}

/// Where and how large a single cell has to be drawn. Coordinates are measured
/// from the top-left corner of the page, with `y` growing down the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPlacement {
    pub page: usize,
    pub kind: CellKind,
    pub column_index: usize,
    /// The normalized text of the cell
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    /// The height of the whole row the cell is in
    pub height: Pt,
    /// Estimated number of lines the text wraps onto
    pub lines_occupied: usize,
    pub alignment: Alignment,
    pub font_size: Pt,
}

impl CellPlacement {
    /// Spacing between lines of this cell such that its lines fill the row height
    pub fn line_height(&self) -> Pt {
        self.height / self.lines_occupied.max(1) as f32
    }
}

/// The placements of one page, in the order they were laid out: the header
/// first, then each body row left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub index: usize,
    pub placements: Vec<CellPlacement>,
}

impl PageLayout {
    pub fn headers(&self) -> impl Iterator<Item = &CellPlacement> {
        self.placements
            .iter()
            .filter(|p| p.kind == CellKind::Header)
    }

    pub fn body(&self) -> impl Iterator<Item = &CellPlacement> {
        self.placements
            .iter()
            .filter(|p| p.kind != CellKind::Header)
    }
}

/// A table laid out onto pages
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedTable {
    pub pages: Vec<PageLayout>,
}

impl RenderedTable {
    /// Every placement of every page, in order
    pub fn placements(&self) -> impl Iterator<Item = &CellPlacement> {
        self.pages.iter().flat_map(|page| page.placements.iter())
    }
}

/// Lays a [Table] out onto as many pages as it needs.
///
/// The header goes at the top of the first page. Every data row is then placed
/// below the previous one with a single height shared by all of its cells, and
/// whenever a row does not fit in what is left of the page's capacity, a new page
/// is started and the header is repeated at its top. Rendering doesn't touch any
/// state outside of the call, so the same renderer can be used for any number of
/// tables.
pub struct TableRenderer<'m, M: ?Sized> {
    metrics: &'m M,
    config: TableConfig,
}

impl<'m, M: TextMetrics + ?Sized> TableRenderer<'m, M> {
    pub fn new(metrics: &'m M, config: TableConfig) -> Self {
        TableRenderer { metrics, config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn heights(&self) -> RowHeightCalculator<'m, M> {
        RowHeightCalculator::new(self.metrics, self.config.height_model, self.config.cell_padding)
    }

    /// Height of the header row. The header is the same on every page.
    pub fn header_height(&self, table: &Table) -> Pt {
        self.heights()
            .row_height(&table.header(), table.columns(), self.config.header_font_size)
    }

    pub fn render(&self, table: &Table) -> RenderedTable {
        let TableConfig {
            font_size,
            header_font_size,
            page_capacity,
            page_margin,
            ..
        } = self.config;
        let columns = table.columns();
        let heights = self.heights();

        let header: Vec<String> = table
            .header()
            .iter()
            .map(|h| normalize_for(h, self.metrics))
            .collect();
        let header_height = heights.row_height(&header, columns, header_font_size);

        let mut cursor = PageCursor::new(page_margin, page_margin, page_capacity, header_height);
        let mut pages: Vec<PageLayout> = Vec::new();
        let mut page = PageLayout {
            index: 0,
            placements: Vec::with_capacity(columns.len() * (table.rows().len() + 1)),
        };

        self.place_row(
            &mut page,
            CellKind::Header,
            &header,
            columns,
            (page_margin, page_margin),
            header_height,
            header_font_size,
        );

        for (row_index, row) in table.rows().iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| normalize_for(cell, self.metrics))
                .collect();
            let row_height = heights.row_height(&cells, columns, font_size);
            tracing::trace!(row = row_index, height = row_height.0, "measured row");

            let y = match cursor.advance(row_height) {
                Advance::Placed { y } => y,
                Advance::NewPage {
                    page: index,
                    header_y,
                    y,
                } => {
                    pages.push(std::mem::replace(
                        &mut page,
                        PageLayout {
                            index,
                            placements: Vec::new(),
                        },
                    ));
                    self.place_row(
                        &mut page,
                        CellKind::Header,
                        &header,
                        columns,
                        (cursor.state().x_origin, header_y),
                        header_height,
                        header_font_size,
                    );
                    y
                }
            };

            self.place_row(
                &mut page,
                CellKind::Body { row: row_index },
                &cells,
                columns,
                (cursor.state().x_origin, y),
                row_height,
                font_size,
            );
        }

        pages.push(page);
        tracing::debug!(
            rows = table.rows().len(),
            pages = pages.len(),
            "laid out table"
        );

        RenderedTable { pages }
    }

    #[allow(clippy::too_many_arguments)]
    fn place_row(
        &self,
        page: &mut PageLayout,
        kind: CellKind,
        cells: &[String],
        columns: &[Column],
        start: (Pt, Pt),
        height: Pt,
        size: Pt,
    ) {
        let (mut x, y) = start;
        for (column_index, (text, column)) in cells.iter().zip(columns.iter()).enumerate() {
            let alignment = match kind {
                CellKind::Header => Alignment::Center,
                CellKind::Body { .. } => column.alignment,
            };
            page.placements.push(CellPlacement {
                page: page.index,
                kind,
                column_index,
                text: text.clone(),
                x,
                y,
                width: column.width,
                height,
                lines_occupied: lines_needed(text, column.width, size, self.metrics),
                alignment,
                font_size: size,
            });
            x += column.width;
        }
    }
}
