// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file access.
//!
//! Reading checks the file size before loading it into memory. Error messages
//! name only the file, never the full path.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "file";

/// Base name of configuration files in the default location.
const DEFAULT_FILE_STEM: &str = "config";

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn source_error(message: String, err: std::io::Error) -> ConfigError {
    ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message,
        source: Some(Box::new(err)),
    }
}

/// Returns the lowercased extension of the path, if any.
pub fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Reads a configuration file into a string.
///
/// # Errors
///
/// Returns `SourceError` when the file is missing, unreadable, or larger
/// than the size limit.
pub fn read_config_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| {
        source_error(
            format!("Failed to read file metadata: {}", file_name(path)),
            e,
        )
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path).map_err(|e| {
        source_error(
            format!("Failed to read configuration file: {}", file_name(path)),
            e,
        )
    })
}

/// Writes serialized configuration to a file, replacing its content.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        source_error(
            format!("Failed to write configuration file: {}", file_name(path)),
            e,
        )
    })
}

/// Returns candidate configuration files in the OS-appropriate config directory.
///
/// One candidate per extension, named `config.<ext>`, in the order given.
///
/// # Examples
///
/// ```rust,no_run
/// use flatcfg::adapters::file::default_locations;
///
/// let candidates = default_locations("myapp", "com.example", &["json", "yaml"]).unwrap();
/// assert_eq!(candidates.len(), 2);
/// ```
pub fn default_locations(
    app_name: &str,
    qualifier: &str,
    extensions: &[&str],
) -> Result<Vec<PathBuf>> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    let config_dir = proj_dirs.config_dir();
    Ok(extensions
        .iter()
        .map(|ext| config_dir.join(format!("{}.{}", DEFAULT_FILE_STEM, ext)))
        .collect())
}
