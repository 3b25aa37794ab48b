use crate::cell::CellValue;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert calamine Data to CellValue.
///
/// Type coercion only: numbers stay numeric, date-formatted cells stay
/// date-typed, everything else becomes text.
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::Date(ndt.date()),
            None => {
                // Serial outside the representable range stays numeric
                tracing::warn!("date serial {} not convertible, keeping as number", dt.as_f64());
                CellValue::Number(dt.as_f64())
            }
        },
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|day| chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
            .map_or_else(|| CellValue::Text(s.clone()), CellValue::Date),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#ERROR: {e:?}")),
    }
}

impl Grid {
    /// Load a grid from the first sheet of an Excel file.
    ///
    /// # Errors
    ///
    /// Returns `UnreadableSheet` if the file cannot be opened or read.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
            .map_err(|e: XlsxError| GridError::UnreadableSheet(e.to_string()))?;

        let sheet_names = workbook.sheet_names().to_vec();
        if sheet_names.is_empty() {
            return Ok(Grid::new());
        }

        Self::from_xlsx_sheet(path, &sheet_names[0])
    }

    /// Load a grid from a specific sheet of an Excel file.
    ///
    /// # Errors
    ///
    /// Returns `UnreadableSheet` if the file cannot be opened, the sheet is
    /// not found, or the read fails.
    pub fn from_xlsx_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
            .map_err(|e: XlsxError| GridError::UnreadableSheet(e.to_string()))?;

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e: XlsxError| GridError::UnreadableSheet(e.to_string()))?;

        let mut grid = Grid::new();
        for row in range.rows() {
            let cells: Vec<CellValue> = row.iter().map(data_to_cell_value).collect();
            grid.rows_mut().push(cells);
        }

        tracing::debug!(
            sheet = sheet_name,
            rows = grid.height(),
            cols = grid.width(),
            "loaded xlsx sheet"
        );

        Ok(grid)
    }

    /// Get sheet names from an Excel file without loading data.
    ///
    /// # Errors
    ///
    /// Returns `UnreadableSheet` if the file cannot be opened.
    pub fn xlsx_sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
            .map_err(|e: XlsxError| GridError::UnreadableSheet(e.to_string()))?;

        Ok(workbook.sheet_names().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use tempfile::tempdir;

    #[test]
    fn test_xlsx_read_types() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("types.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Name").unwrap();
        worksheet.write_number(0, 1, 42.0).unwrap();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        worksheet
            .write_datetime_with_format(
                0,
                2,
                &ExcelDateTime::from_ymd(2024, 3, 1).unwrap(),
                &date_format,
            )
            .unwrap();
        workbook.save(&path).unwrap();

        let grid = Grid::from_xlsx(&path).unwrap();
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.cell(0, 0), &CellValue::Text("Name".to_string()));
        assert_eq!(grid.cell(0, 1), &CellValue::Number(42.0));
        assert_eq!(
            grid.cell(0, 2),
            &CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_xlsx_sheet_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("multi.xlsx");

        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("First").unwrap();
        workbook.add_worksheet().set_name("Second").unwrap();
        workbook.save(&path).unwrap();

        let names = Grid::xlsx_sheet_names(&path).unwrap();
        assert_eq!(names, vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_xlsx_specific_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("specific.xlsx");

        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.set_name("Data").unwrap();
        first.write_string(0, 0, "a").unwrap();
        let second = workbook.add_worksheet();
        second.set_name("Other").unwrap();
        second.write_string(0, 0, "b").unwrap();
        workbook.save(&path).unwrap();

        let grid = Grid::from_xlsx_sheet(&path, "Other").unwrap();
        assert_eq!(grid.cell(0, 0), &CellValue::Text("b".to_string()));
    }

    #[test]
    fn test_unreadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.xlsx");
        std::fs::write(&path, b"not an xlsx file").unwrap();

        let err = Grid::from_xlsx(&path).unwrap_err();
        assert!(matches!(err, GridError::UnreadableSheet(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Grid::from_xlsx("/no/such/file.xlsx").unwrap_err();
        assert!(matches!(err, GridError::UnreadableSheet(_)));
    }
}
