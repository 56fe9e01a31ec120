//! Flat message tables and their JSON decode step.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

/// Message ID → message text for one locale.
///
/// Decoding accepts only a flat JSON object whose values are all strings;
/// nested objects, arrays, numbers and `null` are rejected.
///
/// ```
/// use json_localizer::TranslationTable;
///
/// let table = TranslationTable::from_json_str(r#"{"greeting": "Hello"}"#).unwrap();
/// assert_eq!(table.get("greeting"), Some("Hello"));
///
/// assert!(TranslationTable::from_json_str(r#"{"count": 3}"#).is_err());
/// assert!(TranslationTable::from_json_str(r#"["greeting"]"#).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    /// Messages keyed by ID.
    messages: HashMap<String, String>,
}

impl TranslationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a table from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Decodes a table from a byte stream, reading it to the end.
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Inserts or replaces one message.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(id.into(), text.into());
    }

    /// Looks up a message by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    /// Whether the table holds `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the table has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over all message IDs.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { messages: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
