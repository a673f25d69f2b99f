// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `PropertyStore` trait, the access surface over the
//! live flat property map that the rest of an application talks to.

use crate::domain::{PropertyMap, Result, ScalarValue};

/// Access to a live set of configuration properties.
///
/// Keys are exact dot-path strings. Implementations are not expected to guard
/// against concurrent mutation; share a store behind a lock if needed.
///
/// # Examples
///
/// ```rust
/// use flatcfg::domain::{PropertyMap, PropertyStore, Result, ScalarValue};
///
/// struct MapStore(PropertyMap);
///
/// impl PropertyStore for MapStore {
///     fn properties(&self) -> &PropertyMap {
///         &self.0
///     }
///
///     fn properties_mut(&mut self) -> &mut PropertyMap {
///         &mut self.0
///     }
/// }
///
/// let mut store = MapStore(PropertyMap::new());
/// store.set("app.name", "demo");
/// assert_eq!(store.get("app.name").unwrap(), ScalarValue::from("demo"));
/// assert!(store.get("app.version").is_err());
/// ```
pub trait PropertyStore {
    /// Returns the underlying property map.
    fn properties(&self) -> &PropertyMap;

    /// Returns the underlying property map for mutation.
    fn properties_mut(&mut self) -> &mut PropertyMap;

    /// Retrieves the value stored under the exact key.
    ///
    /// # Returns
    ///
    /// * `Ok(ScalarValue)` - The value was found
    /// * `Err(ConfigError::PropertyNotFound)` - No property has this key
    fn get(&self, key: &str) -> Result<ScalarValue> {
        self.properties()
            .get(key)
            .cloned()
            .ok_or_else(|| crate::domain::ConfigError::PropertyNotFound {
                key: key.to_string(),
            })
    }

    /// Retrieves a value, falling back to `default` when the key is absent.
    fn get_or_default(&self, key: &str, default: ScalarValue) -> ScalarValue {
        self.get(key).unwrap_or(default)
    }

    /// Returns true if the exact key is present.
    fn has(&self, key: &str) -> bool {
        self.properties().contains_key(key)
    }

    /// Stores a value under the exact key.
    fn set(&mut self, key: &str, value: impl Into<ScalarValue>)
    where
        Self: Sized,
    {
        self.properties_mut().set(key, value);
    }

    /// Removes the exact key, returning its previous value.
    fn delete(&mut self, key: &str) -> Option<ScalarValue> {
        self.properties_mut().remove(key)
    }

    /// Returns an independent copy of every property.
    fn snapshot(&self) -> PropertyMap {
        self.properties().clone()
    }

    /// Returns every property whose key starts with `prefix`.
    ///
    /// Matching is plain text, so `app` also returns `apple`.
    fn lookup(&self, prefix: &str) -> PropertyMap {
        self.properties().lookup(prefix)
    }
}
