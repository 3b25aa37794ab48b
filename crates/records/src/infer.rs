//! Header row inference
//!
//! Manually exported spreadsheets frequently prepend title banners or blank
//! separator rows before the real header, so "row 0 is the header" silently
//! misaligns every field. Each row is scored for header-likeness and the
//! first strict maximum wins; dense, string-heavy rows with distinct values
//! score highest.

use qrid_grid::{CellValue, Grid};
use std::collections::HashSet;

/// Rows below a candidate header consulted when deciding whether a
/// header-less column still carries data. A column that is empty in the
/// header row and in this window is dropped even if it has data further
/// down; recency heuristic, not a correctness guarantee.
const LOOKAHEAD_ROWS: usize = 10;

/// The inferred header position and the live columns of one sheet.
///
/// Immutable once computed; every record built from the sheet draws its
/// field names from the same `active_columns` ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSelection {
    /// Row index of the inferred header row.
    pub header_row: usize,
    /// Distinct column indices retained for record construction, in order.
    pub active_columns: Vec<usize>,
}

/// Score a row for header-likeness. All-blank rows are ineligible.
fn header_score(row: &[CellValue]) -> Option<f64> {
    let mut non_empty = 0usize;
    let mut stringish = 0usize;
    let mut unique: HashSet<String> = HashSet::new();

    for cell in row {
        if cell.is_blank() {
            continue;
        }
        non_empty += 1;
        if cell.is_text() {
            stringish += 1;
        }
        unique.insert(cell.to_string().trim().to_lowercase());
    }

    if non_empty == 0 {
        return None;
    }

    Some(2.0 * non_empty as f64 + stringish as f64 + 0.5 * unique.len() as f64)
}

/// Select the header row and the set of active columns for a grid.
///
/// Returns `None` when the sheet has no usable data: either every row is
/// blank, or no column has a header cell or any data within the lookahead
/// window. That is the normal "empty file" outcome, not an error.
#[must_use]
pub fn infer_header(grid: &Grid) -> Option<HeaderSelection> {
    let mut best: Option<(usize, f64)> = None;

    for (index, row) in grid.iter_rows().enumerate() {
        let Some(score) = header_score(row) else {
            continue;
        };
        // Strictly higher only: ties keep the first row seen
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (header_row, score) = best?;

    let mut active_columns = Vec::new();
    for col in 0..grid.width() {
        let named = !grid.cell(header_row, col).is_blank();
        let has_nearby_data = (header_row + 1..=header_row + LOOKAHEAD_ROWS)
            .any(|row| !grid.cell(row, col).is_blank());
        if named || has_nearby_data {
            active_columns.push(col);
        }
    }

    if active_columns.is_empty() {
        return None;
    }

    tracing::debug!(
        header_row,
        score,
        columns = active_columns.len(),
        "inferred header"
    );

    Some(HeaderSelection {
        header_row,
        active_columns,
    })
}
