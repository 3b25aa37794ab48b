use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a raw cell value as read from a spreadsheet.
///
/// Only the types the pipeline distinguishes are modeled: anything the
/// external reader produces that is neither numeric, date-formatted, nor
/// empty arrives here as `Text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    /// Check if the cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell is blank: empty, or text that trims to nothing.
    ///
    /// Blank cells never count toward header scores or row liveness.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) | CellValue::Date(_) => false,
        }
    }

    /// Check if the cell holds text (as opposed to a number or date).
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// Get the cell's natural string form.
    ///
    /// Dates render as `YYYY-MM-DD`; numbers drop a trailing `.0`; empty
    /// cells render as the empty string.
    #[must_use]
    pub fn as_str(&self) -> String {
        self.to_string()
    }

    /// Parse a string into a `CellValue`.
    /// Tries: empty -> number -> date -> text
    #[must_use]
    pub fn parse(s: &str) -> CellValue {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }

        if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CellValue::Date(d);
        }

        CellValue::Text(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s)
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(CellValue::parse(""), CellValue::Empty);
        assert_eq!(CellValue::parse("   "), CellValue::Empty);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(CellValue::parse("42"), CellValue::Number(42.0));
        assert_eq!(CellValue::parse("-2.5"), CellValue::Number(-2.5));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            CellValue::parse("2024-03-01"),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            CellValue::parse("hello"),
            CellValue::Text("hello".to_string())
        );
        // Not a calendar date in the one normalized form we accept
        assert_eq!(
            CellValue::parse("03/01/2024"),
            CellValue::Text("03/01/2024".to_string())
        );
    }

    #[test]
    fn test_blankness() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("  ".to_string()).is_blank());
        assert!(!CellValue::Text("x".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).is_blank());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(3.25).to_string(), "3.25");
        assert_eq!(
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).to_string(),
            "2024-03-01"
        );
        assert_eq!(CellValue::Empty.to_string(), "");
    }
}
