//! Flattened translation bundles

use crate::vars::render_value;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Separator joining nested source keys into a flat key
pub const KEY_DELIMITER: &str = ".";

/// A flat mapping from key to its candidate phrasings.
///
/// Every key holds at least one phrasing and phrasings keep their source
/// order. Bundles are shared behind `Arc` once built and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: HashMap<String, Vec<String>>,
}

impl Bundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bundle from already flat entries, dropping empty phrasing lists
    pub fn from_entries<K, I, P>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, P)>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, phrasings)| {
                (
                    key.into(),
                    phrasings.into_iter().map(Into::into).collect::<Vec<_>>(),
                )
            })
            .filter(|(_, phrasings)| !phrasings.is_empty())
            .collect();
        Self { entries }
    }

    /// Flatten a nested source object.
    ///
    /// Nested objects are re-keyed with [`KEY_DELIMITER`], arrays become one
    /// phrasing per element and any other value becomes a single phrasing.
    /// `null` values are skipped, so an empty array, an array of nulls or a
    /// null value produce no entry.
    pub fn from_source(source: &Map<String, Value>) -> Self {
        let mut entries = HashMap::new();
        flatten_into(None, source, &mut entries);
        Self { entries }
    }

    /// Get the candidate phrasings for a key
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Check if the bundle holds a key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of flat keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every flat key
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over keys and their phrasings
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, phrasings)| (key.as_str(), phrasings.as_slice()))
    }
}

fn flatten_into(
    prefix: Option<&str>,
    source: &Map<String, Value>,
    out: &mut HashMap<String, Vec<String>>,
) {
    for (key, value) in source {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}{KEY_DELIMITER}{key}"),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) => flatten_into(Some(&full_key), nested, out),
            Value::Array(items) => {
                let phrasings: Vec<String> = items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(render_value)
                    .collect();
                if !phrasings.is_empty() {
                    out.insert(full_key, phrasings);
                }
            }
            Value::Null => {}
            scalar => {
                out.insert(full_key, vec![render_value(scalar)]);
            }
        }
    }
}
