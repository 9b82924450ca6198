//! Paginated, bordered tables for PDF documents.
//!
//! A [Table] of text cells is laid out by a [TableRenderer](layout::TableRenderer)
//! into pages of [CellPlacement](layout::CellPlacement)s. Long cell text wraps
//! onto as many lines as it needs, every cell of a row shares the row's height,
//! and the header is repeated at the top of each page. The placements can then be
//! [stamped](stamp_table) onto the pages of a [Document] and written out as a PDF,
//! or the same table can be dumped as aligned text, CSV or TSV through [flat].

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// The table layout engine: text measurement, wrapping estimates, row heights and
/// pagination
pub mod layout;

pub mod flat;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod stamp;
pub use stamp::*;

mod table;
pub use table::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
