use crate::cell::CellValue;
use crate::error::Result;
use crate::grid::Grid;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV reader options
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvOptions {
    /// Create options for TSV (tab-separated values)
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Grid {
    /// Load a grid from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Load a grid from a CSV file with custom options
    pub fn from_csv_with_options<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(BufReader::new(file), options)
    }

    /// Load a grid from a CSV string
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes(), CsvOptions::default())
    }

    /// Load a grid from a reader
    pub fn from_csv_reader<R: Read>(reader: R, options: CsvOptions) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false) // header detection happens downstream
            .flexible(true)
            .from_reader(reader);

        let mut grid = Grid::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
            grid.rows_mut().push(row);
        }

        Ok(grid)
    }
}
