use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error("row {row} has {found} cells but the table has {expected} columns")]
    /// A data row does not have exactly one cell per column
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column {column} has an unusable width of {width}")]
    /// A column width is zero, negative, or not finite
    InvalidColumnWidth { column: usize, width: Pt },

    #[error("{headers} headers were given but {widths} column widths")]
    /// The header row and the configured column widths disagree in length
    ColumnWidthMismatch { headers: usize, widths: usize },

    #[error("a table needs at least one column")]
    NoColumns,

    #[error("font is missing from the document")]
    /// A table style refers to a font that was never added to the document
    FontMissing,

    #[error("page is missing from the document")]
    /// A page id in the page order has no page behind it
    PageMissing,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [csv] failed to write a delimited dump
    Csv(#[from] csv::Error),
}
