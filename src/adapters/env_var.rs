// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable providers.
//!
//! `ProcessEnvironment` reads the real process environment on every lookup.
//! `StaticEnvironment` serves a fixed set of variables and never touches the
//! process, which makes it the provider of choice in tests.

use crate::ports::Environment;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable names (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Environment provider backed by the process environment.
///
/// Variables that are not valid Unicode, or whose name or value exceed the size
/// limits, are treated as unset.
///
/// # Examples
///
/// ```rust
/// use flatcfg::adapters::ProcessEnvironment;
/// use flatcfg::ports::Environment;
///
/// let env = ProcessEnvironment::new();
/// let _home = env.var("HOME");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a new process environment provider.
    pub fn new() -> Self {
        ProcessEnvironment
    }
}

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.len() > MAX_ENV_KEY_LEN {
            return None;
        }

        let value = env::var(name).ok()?;
        if value.len() > MAX_ENV_VALUE_LEN {
            tracing::debug!(
                "Skipping oversized environment variable {}: value_len={} (max {})",
                name,
                value.len(),
                MAX_ENV_VALUE_LEN
            );
            return None;
        }
        Some(value)
    }
}

/// Environment provider serving a fixed set of variables.
///
/// # Examples
///
/// ```rust
/// use flatcfg::adapters::StaticEnvironment;
/// use flatcfg::ports::Environment;
///
/// let env = StaticEnvironment::new().with_var("DB_PORT", "6543");
/// assert_eq!(env.var("DB_PORT").as_deref(), Some("6543"));
/// assert_eq!(env.var("DB_HOST"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    values: HashMap<String, String>,
}

impl StaticEnvironment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Captures the current process environment.
    pub fn capture() -> Self {
        let values: HashMap<String, String> = env::vars()
            .filter(|(k, v)| k.len() <= MAX_ENV_KEY_LEN && v.len() <= MAX_ENV_VALUE_LEN)
            .collect();
        tracing::debug!("Captured {} environment variables", values.len());
        StaticEnvironment { values }
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

impl From<HashMap<String, String>> for StaticEnvironment {
    fn from(values: HashMap<String, String>) -> Self {
        StaticEnvironment { values }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for StaticEnvironment {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StaticEnvironment {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
