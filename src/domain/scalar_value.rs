// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar property values.
//!
//! Every leaf of a configuration document is one of a closed set of scalar kinds.
//! `ScalarValue` carries that runtime type through flattening, placeholder
//! coercion, overrides and binding.

use crate::domain::errors::{ConfigError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A scalar configuration value.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::ScalarValue;
///
/// assert_eq!(ScalarValue::coerce("42"), ScalarValue::Integer(42));
/// assert_eq!(ScalarValue::coerce("TRUE"), ScalarValue::Boolean(true));
/// assert_eq!(ScalarValue::coerce("bar"), ScalarValue::from("bar"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// An absent value
    #[default]
    Null,
    /// A boolean
    Boolean(bool),
    /// A signed integer
    Integer(i64),
    /// A floating point number
    Float(f64),
    /// A string
    String(String),
}

/// Parses a boolean literal, ignoring ASCII case.
///
/// Only the words `true` and `false` are accepted; digits are left to the
/// integer parser.
pub fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl ScalarValue {
    /// Converts text into the most specific scalar it denotes.
    ///
    /// Tries a boolean literal, then an integer literal, and falls back to the
    /// raw string. Never fails.
    pub fn coerce(text: &str) -> Self {
        if let Some(b) = parse_bool(text) {
            return ScalarValue::Boolean(b);
        }
        if let Ok(n) = text.parse::<i64>() {
            return ScalarValue::Integer(n);
        }
        ScalarValue::String(text.to_string())
    }

    /// Returns the name of the runtime type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Null => "null",
            ScalarValue::Boolean(_) => "boolean",
            ScalarValue::Integer(_) => "integer",
            ScalarValue::Float(_) => "float",
            ScalarValue::String(_) => "string",
        }
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a boolean.
    ///
    /// Booleans are returned as-is and strings are parsed as boolean literals.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            ScalarValue::Boolean(b) => Ok(*b),
            ScalarValue::String(s) => parse_bool(s).ok_or_else(|| self.mismatch(key, "boolean")),
            _ => Err(self.mismatch(key, "boolean")),
        }
    }

    /// Returns the value as an `i64`.
    ///
    /// Integers are returned as-is and strings are parsed.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            ScalarValue::Integer(n) => Ok(*n),
            ScalarValue::String(s) => s
                .parse::<i64>()
                .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e)),
            _ => Err(self.mismatch(key, "integer")),
        }
    }

    /// Returns the value as an `f64`.
    ///
    /// Integers widen to floats and strings are parsed.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            ScalarValue::Float(f) => Ok(*f),
            ScalarValue::Integer(n) => Ok(*n as f64),
            ScalarValue::String(s) => s
                .parse::<f64>()
                .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e)),
            _ => Err(self.mismatch(key, "float")),
        }
    }

    /// Parses the textual form of the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatcfg::domain::ScalarValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ScalarValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("server.bind").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.to_string()
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }

    fn mismatch(&self, key: &str, expected: &'static str) -> ConfigError {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            expected,
            found: self.type_name(),
        }
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Boolean(b)
    }
}

impl From<i64> for ScalarValue {
    fn from(n: i64) -> Self {
        ScalarValue::Integer(n)
    }
}

impl From<i32> for ScalarValue {
    fn from(n: i32) -> Self {
        ScalarValue::Integer(n.into())
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        ScalarValue::Float(f)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => Ok(()),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Integer(n) => write!(f, "{}", n),
            ScalarValue::Float(x) => write!(f, "{}", x),
            ScalarValue::String(s) => write!(f, "{}", s),
        }
    }
}
