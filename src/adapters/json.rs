// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document format.

use crate::domain::{ConfigError, DocumentValue, Result};
use crate::ports::{DocumentReader, DocumentWriter};

/// Reads and writes JSON configuration documents.
///
/// Output is pretty-printed with sorted keys.
///
/// # Examples
///
/// ```rust
/// use flatcfg::adapters::JsonFormat;
/// use flatcfg::ports::{DocumentReader, DocumentWriter};
///
/// let format = JsonFormat::new();
/// let doc = format.read(r#"{"database": {"port": 5432}}"#).unwrap();
/// let text = format.write(&doc).unwrap();
/// assert!(text.contains("\"port\": 5432"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonFormat;

impl JsonFormat {
    /// Creates a new JSON format.
    pub fn new() -> Self {
        JsonFormat
    }
}

impl DocumentReader for JsonFormat {
    fn read(&self, content: &str) -> Result<DocumentValue> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;
        Ok(DocumentValue::from(value))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

impl DocumentWriter for JsonFormat {
    fn write(&self, document: &DocumentValue) -> Result<String> {
        serde_json::to_string_pretty(document).map_err(|e| ConfigError::SerializeError {
            message: format!("Failed to serialize JSON: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScalarValue;
    use crate::engine::flatten;

    #[test]
    fn test_json_read_nested() {
        let doc = JsonFormat::new()
            .read(r#"{"database": {"host": "localhost", "port": 5432}}"#)
            .unwrap();
        let props = flatten(&doc);

        assert_eq!(props.get("database.host"), Some(&ScalarValue::from("localhost")));
        assert_eq!(props.get("database.port"), Some(&ScalarValue::Integer(5432)));
    }

    #[test]
    fn test_json_read_mixed_types() {
        let doc = JsonFormat::new()
            .read(r#"{"s": "x", "i": -3, "f": 2.5, "b": false, "n": null, "l": [1, "two"]}"#)
            .unwrap();
        let props = flatten(&doc);

        assert_eq!(props.get("i"), Some(&ScalarValue::Integer(-3)));
        assert_eq!(props.get("f"), Some(&ScalarValue::Float(2.5)));
        assert_eq!(props.get("b"), Some(&ScalarValue::Boolean(false)));
        assert_eq!(props.get("n"), Some(&ScalarValue::Null));
        assert_eq!(props.get("l.1"), Some(&ScalarValue::from("two")));
    }

    #[test]
    fn test_json_read_invalid() {
        let result = JsonFormat::new().read("{not json");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_json_write_sorted_and_pretty() {
        let doc = DocumentValue::mapping([
            ("b", DocumentValue::from(true)),
            ("a", DocumentValue::mapping([("x", DocumentValue::from("y"))])),
        ]);
        let text = JsonFormat::new().write(&doc).unwrap();

        assert_eq!(text, "{\n  \"a\": {\n    \"x\": \"y\"\n  },\n  \"b\": true\n}");
    }

    #[test]
    fn test_json_extensions() {
        let format = JsonFormat::new();
        assert!(DocumentReader::supports(&format, "JSON"));
        assert!(!DocumentWriter::supports(&format, "yaml"));
    }
}
