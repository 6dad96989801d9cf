//! Record and dataset domain types.
//!
//! A [`Record`] is one row of tabular data: an ordered mapping from field name
//! to a JSON scalar. Key order is preserved exactly as the data was handed
//! over, which is what makes "the first record's keys" a meaningful column
//! order. A [`Dataset`] is the immutable, ordered record collection behind one
//! table view.

use crate::domain::error::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of tabular data.
///
/// # Examples
///
/// ```
/// use databook_viewer::Record;
///
/// let water = Record::from_pairs([("Name", "Water"), ("Formula", "H2O")]);
/// assert_eq!(water.keys().collect::<Vec<_>>(), vec!["Name", "Formula"]);
/// assert!(water.matches("h2o"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds a record from `(field, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Inserts or replaces a field. New fields are appended to the key order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Field names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(field, value)` pairs in record order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text shown in a table cell for `key`.
    ///
    /// Missing fields and nulls render as an empty string; everything else
    /// uses [`string_form`].
    #[must_use]
    pub fn cell_text(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(value) => string_form(value),
        }
    }

    /// Returns `true` if any field's string form contains `needle_lower`
    /// case-insensitively.
    ///
    /// `needle_lower` must already be lower-cased; callers lower-case the
    /// search term once per filter pass rather than once per field.
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.0
            .values()
            .any(|value| string_form(value).to_lowercase().contains(needle_lower))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// String form of a field value, used both for searching and for display.
///
/// Strings are returned verbatim, numbers and booleans in their JSON text
/// form, null as `null`, arrays as their elements joined by `,` and objects as
/// compact JSON.
#[must_use]
pub fn string_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => string_form(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Ordered, immutable record collection backing one table view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parses a JSON array of objects, as supplied by the hosting page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Data`] if the payload is not an array of objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)
            .map_err(|e| ViewerError::Data(format!("failed to parse table data: {e}")))?;

        tracing::debug!(record_count = records.len(), "dataset loaded");
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_form_covers_scalars() {
        assert_eq!(string_form(&json!("H2O")), "H2O");
        assert_eq!(string_form(&json!(18.015)), "18.015");
        assert_eq!(string_form(&json!(42)), "42");
        assert_eq!(string_form(&json!(true)), "true");
        assert_eq!(string_form(&Value::Null), "null");
        assert_eq!(string_form(&json!(["a", 1, null])), "a,1,");
    }

    #[test]
    fn cell_text_blanks_null_and_missing() {
        let record = Record::from_pairs([("Name", json!("Argon")), ("Tc", Value::Null)]);
        assert_eq!(record.cell_text("Name"), "Argon");
        assert_eq!(record.cell_text("Tc"), "");
        assert_eq!(record.cell_text("Pc"), "");
    }

    #[test]
    fn matching_is_case_insensitive_over_all_fields() {
        let record = Record::from_pairs([("Name", json!("Ethanol")), ("MW", json!(46.07))]);
        assert!(record.matches("eth"));
        assert!(record.matches("46.0"));
        assert!(!record.matches("water"));
    }

    #[test]
    fn dataset_preserves_key_order_from_json() {
        let dataset = Dataset::from_json(r#"[{"Zeta": 1, "Alpha": 2}]"#).unwrap();
        let first = dataset.get(0).unwrap();
        assert_eq!(first.keys().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn dataset_rejects_non_array_payload() {
        let err = Dataset::from_json(r#"{"Name": "Water"}"#).unwrap_err();
        assert!(matches!(err, ViewerError::Data(_)));
    }
}
