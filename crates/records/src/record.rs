use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of data as an ordered field-name -> value mapping.
///
/// Owned by the caller after construction; the locator codec encodes entries
/// in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Record {
            fields: IndexMap::new(),
        }
    }

    /// Create a record from field/value pairs, e.g. from a manual entry
    /// form rather than a sheet row.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Record::new();
        for (key, value) in pairs {
            record.insert(key.into(), value.into());
        }
        record
    }

    /// Insert a field.
    ///
    /// Duplicate field names follow `IndexMap` semantics: the last write
    /// wins for the value, while the first occurrence keeps the key's
    /// position in the ordering.
    pub fn insert(&mut self, name: String, value: String) {
        self.fields.insert(name, value);
    }

    /// Get a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for Record {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Record::from_pairs(iter)
    }
}
