//! The tabular data model shared by the paginated renderer and the flat dumps.

use crate::units::Pt;
use crate::PDFError;

/// Horizontal placement of text inside a cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A fixed-width column of a [Table]
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    pub width: Pt,
    pub alignment: Alignment,
}

impl Column {
    /// Create a left-aligned column
    pub fn new<S: ToString, W: Into<Pt>>(header: S, width: W) -> Column {
        Column {
            header: header.to_string(),
            width: width.into(),
            alignment: Alignment::Left,
        }
    }

    /// Change how body cells in this column are aligned
    pub fn aligned(mut self, alignment: Alignment) -> Column {
        self.alignment = alignment;
        self
    }
}

/// One cell of text per column
pub type Row = Vec<String>;

/// A header (carried by the columns) and an ordered list of data rows.
///
/// A table can only be built through [Table::new] or [Table::from_records], both
/// of which reject rows whose length differs from the column count. Once built,
/// neither the columns nor the rows can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Table, PDFError> {
        if columns.is_empty() {
            return Err(PDFError::NoColumns);
        }

        for (column, c) in columns.iter().enumerate() {
            if !c.width.is_finite() || c.width <= Pt(0.0) {
                return Err(PDFError::InvalidColumnWidth {
                    column,
                    width: c.width,
                });
            }
        }

        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != columns.len())
        {
            return Err(PDFError::MalformedTable {
                row,
                expected: columns.len(),
                found: r.len(),
            });
        }

        Ok(Table { columns, rows })
    }

    /// Build a table from a header row, one configured width per header, and the
    /// data rows, as handed over by whatever fetched the records. All columns are
    /// left-aligned.
    pub fn from_records<H, W, R, C>(header: H, widths: W, rows: R) -> Result<Table, PDFError>
    where
        H: IntoIterator,
        H::Item: ToString,
        W: IntoIterator,
        W::Item: Into<Pt>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: ToString,
    {
        let header: Vec<String> = header.into_iter().map(|h| h.to_string()).collect();
        let widths: Vec<Pt> = widths.into_iter().map(Into::into).collect();
        if header.len() != widths.len() {
            return Err(PDFError::ColumnWidthMismatch {
                headers: header.len(),
                widths: widths.len(),
            });
        }

        let columns = header
            .into_iter()
            .zip(widths)
            .map(|(header, width)| Column::new(header, width))
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect();

        Table::new(columns, rows)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The header row, one entry per column
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Total width of all the columns laid side by side
    pub fn width(&self) -> Pt {
        self.columns.iter().map(|c| c.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_rows_of_the_wrong_length() {
        let err = Table::from_records(
            ["qty", "mpn"],
            [Pt(20.0), Pt(40.0)],
            vec![vec!["1", "LM317"], vec!["2"]],
        )
        .unwrap_err();

        match err {
            PDFError::MalformedTable {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_mismatched_widths() {
        let err =
            Table::from_records(["qty", "mpn"], [Pt(20.0)], Vec::<Vec<&str>>::new()).unwrap_err();
        assert!(matches!(
            err,
            PDFError::ColumnWidthMismatch {
                headers: 2,
                widths: 1
            }
        ));
    }

    #[test]
    fn rejects_degenerate_columns() {
        assert!(matches!(
            Table::new(Vec::new(), Vec::new()),
            Err(PDFError::NoColumns)
        ));
        assert!(matches!(
            Table::new(vec![Column::new("qty", Pt(0.0))], Vec::new()),
            Err(PDFError::InvalidColumnWidth { column: 0, .. })
        ));
        assert!(matches!(
            Table::new(vec![Column::new("qty", Pt(f32::NAN))], Vec::new()),
            Err(PDFError::InvalidColumnWidth { column: 0, .. })
        ));
    }

    #[test]
    fn keeps_column_and_row_order() {
        let table = Table::from_records(
            ["qty", "mpn"],
            [Pt(20.0), Pt(40.0)],
            vec![vec!["2", "NE555"], vec!["1", "LM317"]],
        )
        .unwrap();

        assert_eq!(table.header(), vec!["qty", "mpn"]);
        assert_eq!(table.rows()[0][1], "NE555");
        assert_eq!(table.rows()[1][1], "LM317");
        assert_eq!(table.width(), Pt(60.0));
    }
}
