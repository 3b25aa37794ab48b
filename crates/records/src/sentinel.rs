//! Sentinel rules for business-meaningful blanks
//!
//! Some fields carry meaning when blank: an asset with no purchase record
//! legitimately has no original cost, and that state must survive the
//! encode/decode round trip instead of silently vanishing with the other
//! omitted blanks.

use serde::Deserialize;

/// Normalize a field name for rule matching: lowercase, non-alphanumeric
/// characters stripped. `"Original Cost"` and `"original  cost"` both
/// normalize to `originalcost`.
#[must_use]
pub fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Replaces one specific empty field with a fixed placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentinelRule {
    /// Field name the rule applies to; matched in normalized form.
    pub field: String,
    /// Placeholder emitted when the field is empty.
    pub replacement: String,
}

impl SentinelRule {
    /// Create a rule.
    #[must_use]
    pub fn new<F: Into<String>, R: Into<String>>(field: F, replacement: R) -> Self {
        SentinelRule {
            field: field.into(),
            replacement: replacement.into(),
        }
    }
}

/// Ordered list of sentinel rules, evaluated first match wins.
///
/// When no rule matches an empty field, the field is omitted from the
/// record. The default table carries the one rule observed behavior
/// requires: an empty original-cost field becomes `"No Original Cost"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SentinelTable {
    rules: Vec<SentinelRule>,
}

impl Default for SentinelTable {
    fn default() -> Self {
        SentinelTable {
            rules: vec![SentinelRule::new("originalcost", "No Original Cost")],
        }
    }
}

impl SentinelTable {
    /// Create an empty table (every blank field gets omitted).
    #[must_use]
    pub fn empty() -> Self {
        SentinelTable { rules: Vec::new() }
    }

    /// Create a table from rules.
    #[must_use]
    pub fn from_rules(rules: Vec<SentinelRule>) -> Self {
        SentinelTable { rules }
    }

    /// Append a rule.
    pub fn push(&mut self, rule: SentinelRule) {
        self.rules.push(rule);
    }

    /// Find the replacement for an empty field, if any rule matches.
    #[must_use]
    pub fn replacement_for(&self, field_name: &str) -> Option<&str> {
        let normalized = normalize_field_name(field_name);
        self.rules
            .iter()
            .find(|rule| normalize_field_name(&rule.field) == normalized)
            .map(|rule| rule.replacement.as_str())
    }
}
