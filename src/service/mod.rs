// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.
//!
//! The store implements the `PropertyStore` trait and ties the engine to the
//! file-backed readers and writers.

pub mod default_store;

// Re-export commonly used types
pub use default_store::{ConfigStoreBuilder, DefaultConfigStore};
