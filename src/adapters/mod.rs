// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! Document formats implement both `DocumentReader` and `DocumentWriter`;
//! environment providers implement `Environment`.

pub mod env_var;
pub mod file;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
pub use env_var::{ProcessEnvironment, StaticEnvironment};
#[cfg(feature = "json")]
pub use json::JsonFormat;
#[cfg(feature = "yaml")]
pub use yaml::YamlFormat;
