// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the property path model, scalar and document values, the
//! flat property map and the error type. It is independent of any file format
//! or environment access.

pub mod document;
pub mod errors;
pub mod property_key;
pub mod property_map;
pub mod scalar_value;
pub mod service;

// Re-export commonly used types
pub use document::DocumentValue;
pub use errors::{ConfigError, Result};
pub use property_key::PropertyKey;
pub use property_map::PropertyMap;
pub use scalar_value::ScalarValue;
pub use service::PropertyStore;
