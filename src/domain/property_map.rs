// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat property maps.
//!
//! A `PropertyMap` maps dot-path keys to scalar leaves. Only leaf paths are
//! stored; a map holding both `a` and `a.b` cannot be turned back into a tree.

use crate::domain::ScalarValue;
use std::collections::hash_map::{self, HashMap};

/// A single-level mapping from property key to scalar value.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::{PropertyMap, ScalarValue};
///
/// let mut props = PropertyMap::new();
/// props.set("app.name", "demo");
/// props.set("app.port", 8080);
///
/// assert_eq!(props.get("app.port"), Some(&ScalarValue::Integer(8080)));
/// assert_eq!(props.lookup("app").len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyMap {
    entries: HashMap<String, ScalarValue>,
}

impl PropertyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under the exact key.
    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.entries.get(key)
    }

    /// Stores a value under the exact key, returning the previous one.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ScalarValue>,
    ) -> Option<ScalarValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes the exact key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ScalarValue> {
        self.entries.remove(key)
    }

    /// Returns true if the exact key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns an independent copy of every entry.
    pub fn snapshot(&self) -> HashMap<String, ScalarValue> {
        self.entries.clone()
    }

    /// Returns every entry whose key starts with `prefix`.
    ///
    /// Matching is literal text, not hierarchical: `app` also matches `apple`,
    /// and `a.b` matches `a.bc`.
    pub fn lookup(&self, prefix: &str) -> PropertyMap {
        self.entries
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Copies every entry of `other` into this map, overwriting equal keys.
    pub fn merge(&mut self, other: PropertyMap) {
        self.entries.extend(other.entries);
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> hash_map::Keys<'_, String, ScalarValue> {
        self.entries.keys()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> hash_map::Iter<'_, String, ScalarValue> {
        self.entries.iter()
    }

    /// Iterates over the entries with mutable access to the values.
    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, String, ScalarValue> {
        self.entries.iter_mut()
    }

    /// Returns the keys in sorted order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl From<HashMap<String, ScalarValue>> for PropertyMap {
    fn from(entries: HashMap<String, ScalarValue>) -> Self {
        PropertyMap { entries }
    }
}

impl From<PropertyMap> for HashMap<String, ScalarValue> {
    fn from(map: PropertyMap) -> Self {
        map.entries
    }
}

impl<K: Into<String>, V: Into<ScalarValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PropertyMap {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<ScalarValue>> Extend<(K, V)> for PropertyMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, ScalarValue);
    type IntoIter = hash_map::IntoIter<String, ScalarValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a ScalarValue);
    type IntoIter = hash_map::Iter<'a, String, ScalarValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut PropertyMap {
    type Item = (&'a String, &'a mut ScalarValue);
    type IntoIter = hash_map::IterMut<'a, String, ScalarValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}
