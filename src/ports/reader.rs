// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document reader trait definition.
//!
//! This module defines the `DocumentReader` trait, which turns the raw content of
//! a configuration file (YAML, JSON, etc.) into a `DocumentValue` tree. Flattening
//! and placeholder handling happen afterwards and are not the reader's concern.

use crate::domain::{DocumentValue, Result};

/// A trait for parsing configuration documents.
///
/// # Examples
///
/// ```rust
/// use flatcfg::ports::DocumentReader;
/// use flatcfg::domain::{DocumentValue, Result};
///
/// struct KeyValueReader;
///
/// impl DocumentReader for KeyValueReader {
///     fn read(&self, content: &str) -> Result<DocumentValue> {
///         Ok(DocumentValue::mapping(content.lines().filter_map(|line| {
///             line.split_once('=')
///                 .map(|(k, v)| (k.trim(), DocumentValue::from(v.trim())))
///         })))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let doc = KeyValueReader.read("name = demo").unwrap();
/// assert_eq!(doc.get("name"), Some(&DocumentValue::from("demo")));
/// ```
pub trait DocumentReader: Send + Sync {
    /// Parses configuration content into a document tree.
    ///
    /// # Returns
    ///
    /// * `Ok(DocumentValue)` - The parsed document
    /// * `Err(ConfigError::ParseError)` - The content is not valid for this format
    fn read(&self, content: &str) -> Result<DocumentValue>;

    /// Returns the file extensions (without the leading dot) handled by this reader.
    fn supported_extensions(&self) -> &[&str];

    /// Returns true if this reader handles the given extension, ignoring case.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestReader;

    impl DocumentReader for TestReader {
        fn read(&self, _content: &str) -> Result<DocumentValue> {
            Ok(DocumentValue::mapping([("test", DocumentValue::from("value"))]))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_reader_read() {
        let doc = TestReader.read("ignored").unwrap();
        assert_eq!(doc.get("test"), Some(&DocumentValue::from("value")));
    }

    #[test]
    fn test_reader_supports_ignores_case() {
        assert!(TestReader.supports("TST"));
        assert!(TestReader.supports("test"));
        assert!(!TestReader.supports("json"));
    }

    #[test]
    fn test_reader_is_object_safe() {
        let reader: Box<dyn DocumentReader> = Box::new(TestReader);
        assert_eq!(reader.supported_extensions().len(), 2);
    }
}
