// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat property-map configuration.
//!
//! This crate reads nested configuration documents (JSON, YAML), flattens them into
//! a map of dot-path keys to scalar values, resolves `${NAME:default}` placeholders
//! against the environment, applies per-key environment overrides, and can rebuild
//! the nested document from the flat map to write it back.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`PropertyKey`, `ScalarValue`, `DocumentValue`,
//!   `PropertyMap`), errors and the `PropertyStore` trait
//! - **Ports**: Trait definitions for the edges (`DocumentReader`, `DocumentWriter`,
//!   `Environment`)
//! - **Adapters**: JSON and YAML formats, environment providers and file access
//! - **Engine**: Flattening, unflattening, placeholder resolution and overrides
//! - **Binding**: Schema-driven copying of properties into typed structures
//! - **Service**: The configuration store that orchestrates everything
//!
//! # Feature Flags
//!
//! - `json`: Enable JSON support (default)
//! - `yaml`: Enable YAML support (default)
//!
//! # Quick Start
//!
//! ```rust
//! use flatcfg::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let env = StaticEnvironment::new().with_var("DB_HOST", "db.internal");
//! let mut store = DefaultConfigStore::builder()
//!     .with_default_formats()
//!     .with_environment(Arc::new(env))
//!     .build()?;
//!
//! store.load_str("db:\n  host: localhost\n  port: ${PORT:5432}\n", "yaml")?;
//!
//! assert_eq!(store.get("db.host")?, ScalarValue::from("db.internal"));
//! assert_eq!(store.get("db.port")?.as_i64("db.port")?, 5432);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod binding;
pub mod domain;
pub mod engine;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::binding::Schema;
    pub use crate::domain::{
        ConfigError, DocumentValue, PropertyKey, PropertyMap, PropertyStore, Result, ScalarValue,
    };
    pub use crate::engine::{flatten, load_properties, unflatten};
    pub use crate::ports::{DocumentReader, DocumentWriter, Environment};
    pub use crate::service::{ConfigStoreBuilder, DefaultConfigStore};

    pub use crate::adapters::{ProcessEnvironment, StaticEnvironment};
    // Re-export formats based on feature flags
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonFormat;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlFormat;
}
