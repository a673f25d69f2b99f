// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration tests.

use flatcfg::adapters::StaticEnvironment;
use flatcfg::service::{ConfigStoreBuilder, DefaultConfigStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Installs a test-writer subscriber so store logging shows up in failing tests.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Writes `content` to `name` inside `dir` and returns the full path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Returns a builder with all formats and the given fixed environment.
#[allow(dead_code)]
pub fn builder(env: StaticEnvironment) -> ConfigStoreBuilder {
    DefaultConfigStore::builder()
        .with_default_formats()
        .with_environment(Arc::new(env))
}
