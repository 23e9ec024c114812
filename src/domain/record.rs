//! Record - One Row of Server-Supplied Table Data

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::STATUS_FIELD;

/// A printer, model or print job as returned by the backend.
///
/// The schema is open: the table layer only interprets `status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field insertion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String value of a field, if it is a string
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Numeric value of a field, if it is a number
    pub fn f64_field(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    /// Integer value of a field, if it is an integer
    pub fn i64_field(&self, field: &str) -> Option<i64> {
        self.0.get(field).and_then(Value::as_i64)
    }

    /// The `status` field when present and textual
    pub fn status(&self) -> Option<&str> {
        self.str_field(STATUS_FIELD)
    }

    /// Display text of a field; empty when absent
    pub fn field_text(&self, field: &str) -> String {
        self.0.get(field).map(value_text).unwrap_or_default()
    }

    /// Iterate field values in source order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when any field's text contains `needle_lower`.
    ///
    /// `needle_lower` must already be lower-cased.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.values()
            .any(|value| value_text(value).to_lowercase().contains(needle_lower))
    }

    /// True when the textual status equals `filter_lower` ignoring case
    pub fn matches_status(&self, filter_lower: &str) -> bool {
        self.status()
            .is_some_and(|status| status.to_lowercase() == filter_lower)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Text form of a JSON value as shown to and searched by the user
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
