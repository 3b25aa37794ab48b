//! Header inference and record building for qrid
//!
//! Takes a raw cell grid, works out which row is the real header (manual
//! exports routinely prepend title banners and blank rows), selects the
//! live columns, and converts each qualifying data row into an ordered
//! field mapping ready for locator encoding.
//!
//! # Examples
//!
//! ```
//! use qrid_grid::Grid;
//! use qrid_records::{infer_header, RecordBuilder};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["Quarterly Asset Export", "", ""],
//!     vec!["Name", "Email", "Original Cost"],
//!     vec!["Ann", "ann@x.com", ""],
//! ]);
//!
//! let selection = infer_header(&grid).expect("sheet has data");
//! assert_eq!(selection.header_row, 1);
//!
//! let records = RecordBuilder::new().build(&grid, &selection);
//! assert_eq!(records[0].get("Original Cost"), Some("No Original Cost"));
//! ```

mod builder;
mod infer;
mod record;
mod sentinel;

/// Re-export the record builder.
pub use builder::RecordBuilder;
/// Re-export header inference.
pub use infer::{infer_header, HeaderSelection};
/// Re-export the record type.
pub use record::Record;
/// Re-export sentinel rule types.
pub use sentinel::{normalize_field_name, SentinelRule, SentinelTable};
