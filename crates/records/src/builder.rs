use crate::infer::HeaderSelection;
use crate::record::Record;
use crate::sentinel::SentinelTable;
use qrid_grid::{CellValue, Grid};

/// Builds records from a grid and an inferred header selection.
///
/// Carries the sentinel table consulted for empty fields; everything else
/// about the build is fixed by the header selection.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    sentinels: SentinelTable,
}

impl RecordBuilder {
    /// Create a builder with the default sentinel table.
    #[must_use]
    pub fn new() -> Self {
        RecordBuilder::default()
    }

    /// Set the sentinel table.
    #[must_use]
    pub fn with_sentinels(mut self, sentinels: SentinelTable) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Build one record per qualifying data row below the header.
    ///
    /// Rows with no live data in any active column are skipped entirely,
    /// never emitted as empty records. Within a record, an empty field is
    /// omitted unless a sentinel rule supplies its placeholder.
    #[must_use]
    pub fn build(&self, grid: &Grid, selection: &HeaderSelection) -> Vec<Record> {
        let field_names = field_names(grid, selection);

        let mut records = Vec::new();
        for row in selection.header_row + 1..grid.height() {
            let live = selection
                .active_columns
                .iter()
                .any(|&col| !grid.cell(row, col).is_blank());
            if !live {
                continue;
            }

            let mut record = Record::new();
            for (name, &col) in field_names.iter().zip(&selection.active_columns) {
                let value = normalize_cell(grid.cell(row, col));
                if value.is_empty() {
                    if let Some(replacement) = self.sentinels.replacement_for(name) {
                        record.insert(name.clone(), replacement.to_string());
                    }
                } else {
                    record.insert(name.clone(), value);
                }
            }
            records.push(record);
        }

        tracing::debug!(records = records.len(), "built records");
        records
    }
}

/// Field names for the active columns, in order: the header cell's trimmed
/// text, or `Column_<rank>` when the header cell is blank (rank is the
/// 1-based position within the active columns).
fn field_names(grid: &Grid, selection: &HeaderSelection) -> Vec<String> {
    selection
        .active_columns
        .iter()
        .enumerate()
        .map(|(rank, &col)| {
            let cell = grid.cell(selection.header_row, col);
            if cell.is_blank() {
                format!("Column_{}", rank + 1)
            } else {
                cell.to_string().trim().to_string()
            }
        })
        .collect()
}

/// Normalize a cell to its record value: dates as `YYYY-MM-DD` calendar
/// days, other non-empty cells via their natural string form, blanks to the
/// empty string.
fn normalize_cell(cell: &CellValue) -> String {
    if cell.is_blank() {
        String::new()
    } else {
        cell.to_string()
    }
}
