//! The table layout engine.
//!
//! Laying a table out happens in a few small steps, each of which can be used on
//! its own:
//!
//! - [`TextMetrics`](crate::layout::TextMetrics) measures text. It is implemented
//!   for loaded [`Font`](crate::Font)s and for [`UniformMetrics`](crate::layout::UniformMetrics).
//! - [`normalize`](crate::layout::normalize) cleans cell text, and
//!   [`lines_needed`](crate::layout::lines_needed) estimates how many lines it
//!   wraps onto in a column.
//! - [`RowHeightCalculator`](crate::layout::RowHeightCalculator) turns a row into
//!   a single height shared by all of its cells.
//! - [`PageCursor`](crate::layout::PageCursor) decides where rows go and when a
//!   page is full.
//! - [`TableRenderer`](crate::layout::TableRenderer) ties these together and
//!   produces [`CellPlacement`](crate::layout::CellPlacement)s grouped by page.
//!
//! # Example
//!
//! ```
//! use pdf_table_gen::layout::{TableRenderer, UniformMetrics};
//! use pdf_table_gen::{Mm, Table, TableConfig};
//!
//! let table = Table::from_records(
//!     ["qty", "mpn", "manufacturer", "description"],
//!     [Mm(25.0), Mm(70.0), Mm(70.0), Mm(100.0)],
//!     vec![vec!["4", "LM317T", "Texas Instruments", "Adjustable regulator"]],
//! )
//! .expect("rows match the header");
//!
//! let metrics = UniformMetrics::default();
//! let rendered = TableRenderer::new(&metrics, TableConfig::default()).render(&table);
//!
//! assert_eq!(rendered.pages.len(), 1);
//! assert_eq!(rendered.pages[0].placements.len(), 8);
//! ```

mod cursor;
mod height;
mod margins;
mod metrics;
mod render;
mod wrap;

pub use cursor::*;
pub use height::*;
pub use margins::*;
pub use metrics::*;
pub use render::*;
pub use wrap::*;
