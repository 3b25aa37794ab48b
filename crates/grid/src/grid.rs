use crate::cell::CellValue;

const EMPTY: CellValue = CellValue::Empty;

/// A raw 2D grid of cells for one sheet (row-major storage).
///
/// Rows may be ragged: a short row behaves as if padded with empty cells on
/// the right. The grid carries exactly what the external reader produced --
/// no trimming, no row dropping. It lives only long enough for header
/// inference and record building.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Grid { rows: Vec::new() }
    }

    /// Create a grid from a 2D vector of values.
    #[must_use]
    pub fn from_rows<T: Into<CellValue>>(rows: Vec<Vec<T>>) -> Self {
        Grid {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Get the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Get the maximum row length across the grid.
    ///
    /// Ragged rows make this the only meaningful column count.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index, if it exists.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get the cell at (row, col).
    ///
    /// Out-of-range positions (including trailing cells of a short row)
    /// read as empty.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.rows
    }
}
