// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document format.

use crate::domain::{ConfigError, DocumentValue, Result};
use crate::ports::{DocumentReader, DocumentWriter};

/// Reads and writes YAML configuration documents.
///
/// Non-string mapping keys (numbers, booleans) are read as their text form.
/// An empty document reads as an empty mapping.
///
/// # Examples
///
/// ```rust
/// use flatcfg::adapters::YamlFormat;
/// use flatcfg::engine::flatten;
/// use flatcfg::ports::DocumentReader;
///
/// let doc = YamlFormat::new()
///     .read("database:\n  host: localhost\n  port: 5432")
///     .unwrap();
/// let props = flatten(&doc);
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlFormat;

impl YamlFormat {
    /// Creates a new YAML format.
    pub fn new() -> Self {
        YamlFormat
    }
}

impl DocumentReader for YamlFormat {
    fn read(&self, content: &str) -> Result<DocumentValue> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        if value.is_null() {
            return Ok(DocumentValue::empty_mapping());
        }
        DocumentValue::try_from(value)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

impl DocumentWriter for YamlFormat {
    fn write(&self, document: &DocumentValue) -> Result<String> {
        serde_yaml::to_string(document).map_err(|e| ConfigError::SerializeError {
            message: format!("Failed to serialize YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
