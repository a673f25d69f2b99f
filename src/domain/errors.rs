// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! All errors use `thiserror`. Placeholder resolution and environment overrides
//! never fail; the errors here come from reconstruction, binding, typed access
//! and the reader/writer boundary.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for configuration operations.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::PropertyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested property key is not present in the store.
    #[error("Property not found: {key}")]
    PropertyNotFound {
        /// The key that was not found
        key: String,
    },

    /// Failed to convert a property value to the requested type.
    #[error("Failed to convert property '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A property holds a value of a different runtime type than the one requested.
    #[error("Property '{key}' has type {found}, expected {expected}")]
    TypeMismatch {
        /// The key being bound
        key: String,
        /// The type the caller asked for
        expected: &'static str,
        /// The type actually stored
        found: &'static str,
    },

    /// A property map names the same path as both a leaf and an interior node.
    #[error("Ambiguous property path '{path}': it holds a value and also has nested properties")]
    AmbiguousPath {
        /// The path that is both a leaf and a parent
        path: String,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to serialize a configuration document.
    #[error("Failed to serialize configuration: {message}")]
    SerializeError {
        /// The error message
        message: String,
        /// The underlying serializer error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred while accessing a configuration file.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// None of the candidate configuration files could be loaded.
    #[error("Configuration has not been read, tried: {}", .tried.join(", "))]
    NoSourceAvailable {
        /// The candidate paths, in the order they were tried
        tried: Vec<String>,
    },

    /// No registered reader or writer handles the file's extension.
    #[error("No {direction} registered for configuration file '{path}'")]
    UnsupportedFormat {
        /// The file path
        path: String,
        /// Either "reader" or "writer"
        direction: &'static str,
    },

    /// The store has no destination to save to.
    #[error("Configuration destination is not defined")]
    MissingDestination,

    /// An I/O error occurred while reading or writing configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
