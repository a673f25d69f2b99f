// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hierarchical document values.
//!
//! `DocumentValue` is the in-memory tree exchanged with readers and writers:
//! a mapping, a sequence or a scalar. Mapping keys are kept sorted so that
//! serialized output is stable.

use crate::domain::ScalarValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A parsed configuration document.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::{DocumentValue, ScalarValue};
///
/// let doc = DocumentValue::mapping([
///     ("name", DocumentValue::from("app")),
///     ("ports", DocumentValue::Sequence(vec![80.into(), 443.into()])),
/// ]);
/// assert!(doc.is_mapping());
/// assert_eq!(doc.get("name"), Some(&DocumentValue::Scalar(ScalarValue::from("app"))));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentValue {
    /// String-keyed mapping
    Mapping(BTreeMap<String, DocumentValue>),
    /// Ordered sequence
    Sequence(Vec<DocumentValue>),
    /// Leaf value
    Scalar(ScalarValue),
}

impl DocumentValue {
    /// Returns an empty mapping.
    pub fn empty_mapping() -> Self {
        DocumentValue::Mapping(BTreeMap::new())
    }

    /// Builds a mapping from key/value pairs.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, DocumentValue)>,
    {
        DocumentValue::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns true for the mapping variant.
    pub fn is_mapping(&self) -> bool {
        matches!(self, DocumentValue::Mapping(_))
    }

    /// Looks up a direct child of a mapping.
    pub fn get(&self, key: &str) -> Option<&DocumentValue> {
        match self {
            DocumentValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the scalar payload of a leaf.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            DocumentValue::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for DocumentValue {
    fn default() -> Self {
        DocumentValue::empty_mapping()
    }
}

impl From<ScalarValue> for DocumentValue {
    fn from(value: ScalarValue) -> Self {
        DocumentValue::Scalar(value)
    }
}

macro_rules! scalar_document_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DocumentValue {
                fn from(value: $ty) -> Self {
                    DocumentValue::Scalar(ScalarValue::from(value))
                }
            }
        )*
    };
}

scalar_document_from!(String, &str, bool, i64, i32, f64);

#[cfg(feature = "json")]
impl From<serde_json::Value> for DocumentValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Object(map) => DocumentValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, DocumentValue::from(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                DocumentValue::Sequence(items.into_iter().map(DocumentValue::from).collect())
            }
            Value::Null => DocumentValue::Scalar(ScalarValue::Null),
            Value::Bool(b) => DocumentValue::Scalar(ScalarValue::Boolean(b)),
            Value::Number(n) => DocumentValue::Scalar(json_number(&n)),
            Value::String(s) => DocumentValue::Scalar(ScalarValue::String(s)),
        }
    }
}

#[cfg(feature = "json")]
fn json_number(n: &serde_json::Number) -> ScalarValue {
    if let Some(i) = n.as_i64() {
        ScalarValue::Integer(i)
    } else if n.is_u64() {
        // Above i64::MAX; kept as text rather than rounded to a float.
        ScalarValue::String(n.to_string())
    } else if let Some(f) = n.as_f64() {
        ScalarValue::Float(f)
    } else {
        ScalarValue::String(n.to_string())
    }
}

#[cfg(feature = "yaml")]
impl TryFrom<serde_yaml::Value> for DocumentValue {
    type Error = crate::domain::ConfigError;

    fn try_from(value: serde_yaml::Value) -> crate::domain::Result<Self> {
        use serde_yaml::Value;

        Ok(match value {
            Value::Mapping(map) => {
                let mut entries = BTreeMap::new();
                for (k, v) in map {
                    entries.insert(yaml_key(k)?, DocumentValue::try_from(v)?);
                }
                DocumentValue::Mapping(entries)
            }
            Value::Sequence(items) => DocumentValue::Sequence(
                items
                    .into_iter()
                    .map(DocumentValue::try_from)
                    .collect::<crate::domain::Result<_>>()?,
            ),
            Value::Null => DocumentValue::Scalar(ScalarValue::Null),
            Value::Bool(b) => DocumentValue::Scalar(ScalarValue::Boolean(b)),
            Value::Number(n) => DocumentValue::Scalar(yaml_number(&n)),
            Value::String(s) => DocumentValue::Scalar(ScalarValue::String(s)),
            Value::Tagged(tagged) => DocumentValue::try_from(tagged.value)?,
        })
    }
}

#[cfg(feature = "yaml")]
fn yaml_number(n: &serde_yaml::Number) -> ScalarValue {
    if let Some(i) = n.as_i64() {
        ScalarValue::Integer(i)
    } else if n.is_u64() {
        // Above i64::MAX; kept as text rather than rounded to a float.
        ScalarValue::String(n.to_string())
    } else if let Some(f) = n.as_f64() {
        ScalarValue::Float(f)
    } else {
        ScalarValue::String(n.to_string())
    }
}

/// YAML allows non-string keys; scalars are rendered as text, anything else is rejected.
#[cfg(feature = "yaml")]
fn yaml_key(key: serde_yaml::Value) -> crate::domain::Result<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => yaml_key(tagged.value),
        other => Err(crate::domain::ConfigError::ParseError {
            message: format!("Unsupported YAML mapping key: {:?}", other),
            source: None,
        }),
    }
}
