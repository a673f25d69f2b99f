// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dot-delimited property paths.
//!
//! A property key is a sequence of segments joined by `.`. A segment made only of
//! ASCII digits names an element of a sequence in the document the key was
//! flattened from. There is no escaping: a segment can never contain a dot.

use std::fmt;

/// The character separating path segments.
pub const DELIMITER: char = '.';

/// Extends `prefix` with one more segment.
///
/// An empty prefix yields the segment unchanged, so top-level keys never carry a
/// leading dot.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::property_key::join;
///
/// assert_eq!(join("", "database"), "database");
/// assert_eq!(join("database", "host"), "database.host");
/// ```
pub fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        let mut key = String::with_capacity(prefix.len() + 1 + segment.len());
        key.push_str(prefix);
        key.push(DELIMITER);
        key.push_str(segment);
        key
    }
}

/// Splits a key into its ordered segments.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::property_key::split;
///
/// assert_eq!(split("servers.0.host"), vec!["servers", "0", "host"]);
/// ```
pub fn split(key: &str) -> Vec<&str> {
    key.split(DELIMITER).collect()
}

/// Returns true when the segment is a non-negative integer literal.
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// A type-safe wrapper for property keys.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::property_key::PropertyKey;
///
/// let key = PropertyKey::from("database").child("port");
/// assert_eq!(key.as_str(), "database.port");
/// assert_eq!(key.env_var_name(), "DATABASE_PORT");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Creates a new `PropertyKey` from a `String`.
    pub fn new(key: String) -> Self {
        PropertyKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `PropertyKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns a new key extended by one segment.
    pub fn child(&self, segment: &str) -> Self {
        PropertyKey(join(&self.0, segment))
    }

    /// Returns a new key extended by a sequence index.
    pub fn index(&self, index: usize) -> Self {
        self.child(&index.to_string())
    }

    /// Returns the ordered segments of this key.
    pub fn segments(&self) -> Vec<&str> {
        split(&self.0)
    }

    /// Returns true when `other` is this key or lies below it.
    ///
    /// Unlike a plain `starts_with`, this respects segment boundaries:
    /// `a.b` contains `a.b.c` but not `a.bc`.
    pub fn contains(&self, other: &str) -> bool {
        if self.0.is_empty() {
            return true;
        }
        match other.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(DELIMITER),
            None => false,
        }
    }

    /// Derives the environment variable consulted when overriding this property.
    ///
    /// Dots become underscores and the result is uppercased.
    pub fn env_var_name(&self) -> String {
        self.0.replace(DELIMITER, "_").to_uppercase()
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey(s)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey(s.to_string())
    }
}

impl From<PropertyKey> for String {
    fn from(key: PropertyKey) -> Self {
        key.0
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty_prefix() {
        assert_eq!(join("", "app"), "app");
    }

    #[test]
    fn test_join_nested() {
        assert_eq!(join("app.database", "host"), "app.database.host");
    }

    #[test]
    fn test_join_index() {
        assert_eq!(join("servers", "0"), "servers.0");
    }

    #[test]
    fn test_split_single_segment() {
        assert_eq!(split("app"), vec!["app"]);
    }

    #[test]
    fn test_split_empty_key() {
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_is_index_segment() {
        assert!(is_index_segment("0"));
        assert!(is_index_segment("12"));
        assert!(!is_index_segment(""));
        assert!(!is_index_segment("-1"));
        assert!(!is_index_segment("1a"));
    }

    #[test]
    fn test_key_child_and_index() {
        let key = PropertyKey::default().child("servers").index(2).child("host");
        assert_eq!(key.as_str(), "servers.2.host");
        assert_eq!(key.segments(), vec!["servers", "2", "host"]);
    }

    #[test]
    fn test_key_contains_respects_segments() {
        let key = PropertyKey::from("a.b");
        assert!(key.contains("a.b"));
        assert!(key.contains("a.b.c"));
        assert!(!key.contains("a.bc"));
        assert!(!key.contains("a"));
    }

    #[test]
    fn test_root_key_contains_everything() {
        assert!(PropertyKey::default().contains("anything.at.all"));
    }

    #[test]
    fn test_env_var_name_uppercases() {
        assert_eq!(PropertyKey::from("db.port").env_var_name(), "DB_PORT");
        assert_eq!(
            PropertyKey::from("app.http_server.port").env_var_name(),
            "APP_HTTP_SERVER_PORT"
        );
    }

    #[test]
    fn test_key_display_and_conversions() {
        let key = PropertyKey::from("test.key".to_string());
        assert_eq!(format!("{}", key), "test.key");
        let s: String = key.clone().into();
        assert_eq!(s, "test.key");
        assert_eq!(key.into_string(), "test.key");
    }

    #[test]
    fn test_key_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(PropertyKey::from("test.key"), "value1");
        assert_eq!(map.get(&PropertyKey::from("test.key")), Some(&"value1"));
        assert_eq!(map.get(&PropertyKey::from("other.key")), None);
    }
}
