//! Raw cell grid model for qrid
//!
//! Wraps the output of external spreadsheet readers (Excel via calamine,
//! CSV/TSV via csv) as a simple rectangular-or-ragged array of typed cell
//! values. The adapters perform type coercion only -- no trimming, no row
//! dropping -- so downstream header inference sees the sheet exactly as
//! exported, banner rows and all.
//!
//! # Examples
//!
//! ```
//! use qrid_grid::{CellValue, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["Name", "Cost"],
//!     vec!["Widget", "42"],
//! ]);
//!
//! assert_eq!(grid.height(), 2);
//! assert_eq!(grid.cell(0, 1), &CellValue::Text("Cost".to_string()));
//! ```

mod cell;
mod csv;
mod error;
mod grid;
mod xlsx;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export CSV options.
pub use csv::CsvOptions;
/// Re-export grid error types.
pub use error::{GridError, Result};
/// Re-export grid type.
pub use grid::Grid;
