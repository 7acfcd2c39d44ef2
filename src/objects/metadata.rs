//! RawMetadata - the key/value mapping reported by a metadata extractor.

use crate::objects::common::MetadataValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An open-ended mapping from extractor tag names to values.
///
/// There is no fixed schema; any key may be absent. A fresh mapping is
/// built for each analysis and is not retained afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMetadata {
    entries: BTreeMap<String, MetadataValue>,
}

impl RawMetadata {
    /// Creates a new empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from a JSON object, dropping `null` values.
    ///
    /// A key whose value is `null` counts as absent, so `{"GPSPosition": null}`
    /// does not count as GPS provenance.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        object
            .into_iter()
            .filter_map(|(k, v)| MetadataValue::from_json(v).map(|v| (k, v)))
            .collect()
    }

    /// Inserts a value, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<MetadataValue>> FromIterator<(K, V)> for RawMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RawMetadata {
    type Item = (&'a String, &'a MetadataValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, MetadataValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
