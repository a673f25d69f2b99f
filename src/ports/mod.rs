// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the transcoding engine and the outside
//! world: document formats and environment lookup. Adapters implement them.

pub mod environment;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use environment::Environment;
pub use reader::DocumentReader;
pub use writer::DocumentWriter;
