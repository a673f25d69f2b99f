// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document writer trait definition.

use crate::domain::{DocumentValue, Result};

/// A trait for serializing configuration documents.
///
/// The writer receives the tree rebuilt from the flat property map and returns
/// the text to store. Writing the file itself is left to the caller.
pub trait DocumentWriter: Send + Sync {
    /// Serializes a document tree into text.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The serialized document
    /// * `Err(ConfigError::SerializeError)` - The serializer rejected the document
    fn write(&self, document: &DocumentValue) -> Result<String>;

    /// Returns the file extensions (without the leading dot) handled by this writer.
    fn supported_extensions(&self) -> &[&str];

    /// Returns true if this writer handles the given extension, ignoring case.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}
