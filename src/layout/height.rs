use super::metrics::TextMetrics;
use super::wrap::{lines_needed, normalize_for};
use crate::table::Column;
use crate::units::Pt;

/// How the height of a single cell is derived from its text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum RowHeightModel {
    /// Estimated line count times the font's line height, plus padding
    #[default]
    Lines,
    /// Padding plus `width(text) * font_size / column_width`, never less than one
    /// line. This ties the cell height to how densely text fills the column rather
    /// than to a line count, and tends to overshoot for large fonts.
    TextDensity,
}

/// Works out the shared height of every cell in a row so that borders line up.
pub struct RowHeightCalculator<'m, M: ?Sized> {
    metrics: &'m M,
    model: RowHeightModel,
    padding: Pt,
}

impl<'m, M: TextMetrics + ?Sized> RowHeightCalculator<'m, M> {
    /// `padding` is the vertical space added to every cell on top of its text
    pub fn new(metrics: &'m M, model: RowHeightModel, padding: Pt) -> Self {
        RowHeightCalculator {
            metrics,
            model,
            padding,
        }
    }

    /// The height one cell needs for its (normalized) text on its own
    pub fn cell_height(&self, text: &str, column_width: Pt, size: Pt) -> Pt {
        let line_height = self.metrics.line_height(size);
        match self.model {
            RowHeightModel::Lines => {
                let lines = lines_needed(text, column_width, size, self.metrics);
                line_height * lines as f32 + self.padding
            }
            RowHeightModel::TextDensity => {
                let density = self.metrics.width(text, size) * (size / column_width);
                (self.padding + density).max(line_height)
            }
        }
    }

    /// The height of the tallest cell in `row`. `row` holds one entry per column,
    /// which the [Table](crate::Table) constructor guarantees.
    pub fn row_height<S: AsRef<str>>(&self, row: &[S], columns: &[Column], size: Pt) -> Pt {
        row.iter()
            .zip(columns.iter())
            .map(|(cell, column)| {
                let text = normalize_for(cell.as_ref(), self.metrics);
                self.cell_height(&text, column.width, size)
            })
            .fold(self.metrics.line_height(size), Pt::max)
    }
}
