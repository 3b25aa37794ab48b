//! Encoded locator codec for qrid
//!
//! A locator is the full URL embedded in a QR label: the configured base URL
//! followed by the record's fields as `key=value` pairs joined with `"; "`.
//! Encoding happens at generation time; decoding happens in the viewer entry
//! point, which receives the raw URL path and renders the recovered fields.
//!
//! The format carries no escaping, to stay byte-compatible with locators
//! already printed onto physical labels. A value containing `;` is therefore
//! not recoverable on decode (it mis-splits); a value containing `=` is fine
//! because decode splits each segment on the first `=` only.
//!
//! # Examples
//!
//! ```
//! use qrid_locator::{decode, encode};
//! use qrid_records::Record;
//!
//! let record = Record::from_pairs([("Name", "Ann"), ("Email", "ann@x.com")]);
//! let url = encode("https://qrid.example.com/", &record);
//! assert_eq!(url, "https://qrid.example.com/Name=Ann; Email=ann@x.com");
//!
//! let pairs = decode("Name=Ann;%20Email=ann@x.com");
//! assert_eq!(pairs[0], ("Name".to_string(), "Ann".to_string()));
//! ```

use percent_encoding::percent_decode;
use qrid_records::Record;

/// Separator between `key=value` pairs in an encoded locator.
pub const PAIR_SEPARATOR: &str = "; ";

/// Encode a record onto a base URL.
///
/// Fields are emitted in the record's own order. Values are concatenated
/// verbatim; see the module docs for the delimiter hazard this inherits
/// from the locator format.
#[must_use]
pub fn encode(base_url: &str, record: &Record) -> String {
    let pairs: Vec<String> = record
        .iter()
        .map(|(field, value)| format!("{field}={value}"))
        .collect();
    format!("{base_url}{}", pairs.join(PAIR_SEPARATOR))
}

/// Encode a batch of records, one locator per record.
#[must_use]
pub fn encode_all(base_url: &str, records: &[Record]) -> Vec<String> {
    records.iter().map(|r| encode(base_url, r)).collect()
}

/// Decode a URL path segment back into ordered (field, value) pairs.
///
/// Never fails: hand-edited or truncated paths degrade to an empty vec.
/// Segments without a field name are dropped; a value keeps any `=` it
/// contains because only the first `=` splits.
#[must_use]
pub fn decode(path: &str) -> Vec<(String, String)> {
    let decoded = percent_decode(path.as_bytes()).decode_utf8_lossy();
    let decoded = decoded.trim();

    if !decoded.contains('=') {
        return Vec::new();
    }

    decoded
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (field, value) = segment.split_once('=')?;
            if field.is_empty() {
                return None;
            }
            Some((field.to_string(), value.to_string()))
        })
        .collect()
}
