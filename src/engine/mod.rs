// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-tree transcoding and placeholder resolution.
//!
//! Loading runs [`flatten`], then [`resolve_placeholders`], then
//! [`apply_env_overrides`]. Saving runs [`unflatten`]. None of these perform I/O.

pub mod flatten;
pub mod overrides;
pub mod placeholder;
pub mod unflatten;

pub use flatten::flatten;
pub use overrides::{apply_env_overrides, override_value, override_var_name};
pub use placeholder::{extract_placeholders, resolve_placeholders, resolve_value, Placeholder};
pub use unflatten::unflatten;

use crate::domain::{DocumentValue, PropertyMap};
use crate::ports::Environment;

/// Turns a parsed document into the live property map.
///
/// # Examples
///
/// ```
/// use flatcfg::adapters::StaticEnvironment;
/// use flatcfg::domain::{DocumentValue, ScalarValue};
/// use flatcfg::engine::load_properties;
///
/// let doc = DocumentValue::mapping([(
///     "db",
///     DocumentValue::mapping([("port", DocumentValue::from("${PORT:5432}"))]),
/// )]);
/// let env = StaticEnvironment::from([("DB_PORT", "6000")]);
///
/// let props = load_properties(&doc, &env);
/// assert_eq!(props.get("db.port"), Some(&ScalarValue::Integer(6000)));
/// ```
pub fn load_properties(document: &DocumentValue, env: &dyn Environment) -> PropertyMap {
    let mut props = flatten(document);
    resolve_placeholders(&mut props, env);
    apply_env_overrides(&mut props, env);
    props
}
