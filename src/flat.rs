//! Flat, unpaginated dumps of a [Table].
//!
//! These skip the layout engine entirely: there are no pages, no fixed column
//! widths and no wrapping. [aligned] sizes each column to its widest value, which
//! is a different layout strategy from the fixed widths the paginated renderer
//! uses, and [delimited] leaves sizing to whatever reads the output.

use crate::layout::normalize;
use crate::table::Table;
use crate::PDFError;
use std::io::Write;

/// Field separator for [delimited] dumps
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

/// Render the table as plain text: cells left-aligned and padded to the widest
/// value of their column, separated by `" | "`, with a dashed rule under the
/// header as long as the header line.
///
/// ```
/// use pdf_table_gen::{flat, Pt, Table};
///
/// let table = Table::from_records(
///     ["qty", "mpn"],
///     [Pt(20.0), Pt(60.0)],
///     vec![vec!["10", "BC547"]],
/// )
/// .unwrap();
///
/// assert_eq!(flat::aligned(&table), "qty | mpn  \n-----------\n10  | BC547\n");
/// ```
pub fn aligned(table: &Table) -> String {
    let header: Vec<String> = table.header().iter().map(|h| normalize(h)).collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| normalize(cell)).collect())
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            std::iter::once(&header)
                .chain(rows.iter())
                .map(|row| row[i].chars().count())
                .max()
                .unwrap_or_default()
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header_line = line(header.as_slice());
    let mut out = String::new();
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&"-".repeat(header_line.chars().count()));
    out.push('\n');
    for row in rows.iter() {
        out.push_str(&line(row.as_slice()));
        out.push('\n');
    }
    out
}

/// Write the header and every row as delimiter-separated records, quoting cells
/// where the delimiter or quotes demand it
pub fn write_delimited<W: Write>(
    table: &Table,
    delimiter: Delimiter,
    w: W,
) -> Result<(), PDFError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.byte())
        .from_writer(w);
    writer.write_record(table.header())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Like [write_delimited], collecting the output into a string
pub fn delimited(table: &Table, delimiter: Delimiter) -> Result<String, PDFError> {
    let mut out: Vec<u8> = Vec::new();
    write_delimited(table, delimiter, &mut out)?;
    String::from_utf8(out)
        .map_err(|e| PDFError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
