// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable overrides for individual properties.
//!
//! Each property `a.b.c` may be overridden by the variable `A_B_C`. Booleans and
//! integers keep their type: an override that does not parse is ignored.

use crate::domain::scalar_value::parse_bool;
use crate::domain::{PropertyKey, PropertyMap, ScalarValue};
use crate::ports::Environment;

/// Returns the environment variable name that overrides `key`.
///
/// # Examples
///
/// ```
/// use flatcfg::engine::override_var_name;
///
/// assert_eq!(override_var_name("db.port"), "DB_PORT");
/// ```
pub fn override_var_name(key: &str) -> String {
    PropertyKey::from(key).env_var_name()
}

/// Computes the overridden value of one property, if any.
///
/// Returns `None` when the value must stay as it is: the variable is unset or
/// empty, or the current value is a boolean or integer and the override does not
/// parse as one. Any other current type is replaced by the raw string.
pub fn override_value(current: &ScalarValue, raw: &str) -> Option<ScalarValue> {
    match current {
        ScalarValue::Boolean(_) => parse_bool(raw).map(ScalarValue::Boolean),
        ScalarValue::Integer(_) => raw.parse::<i64>().ok().map(ScalarValue::Integer),
        ScalarValue::Null | ScalarValue::Float(_) | ScalarValue::String(_) => {
            Some(ScalarValue::String(raw.to_string()))
        }
    }
}

/// Applies environment overrides to every property, in place. Never fails.
///
/// Run this after placeholder resolution so that overrides win over
/// placeholder defaults.
pub fn apply_env_overrides(props: &mut PropertyMap, env: &dyn Environment) {
    for (key, value) in props.iter_mut() {
        let name = override_var_name(key);
        let Some(raw) = env.non_empty_var(&name) else {
            continue;
        };
        match override_value(value, &raw) {
            Some(overridden) => {
                tracing::debug!("Property '{}' overridden by environment variable {}", key, name);
                *value = overridden;
            }
            None => {
                tracing::warn!(
                    "Ignoring environment variable {}: value is not a valid {} for property '{}'",
                    name,
                    value.type_name(),
                    key
                );
            }
        }
    }
}
