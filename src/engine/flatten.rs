// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document tree to flat property map.

use crate::domain::property_key::join;
use crate::domain::{DocumentValue, PropertyMap};

/// Flattens a document tree into dot-path properties.
///
/// Mapping entries extend the path with their key, sequence elements with their
/// zero-based index. Every scalar, including null, becomes one entry.
///
/// Empty mappings and empty sequences contribute nothing, so they do not survive
/// a round trip through [`unflatten`](crate::engine::unflatten).
///
/// # Examples
///
/// ```
/// use flatcfg::domain::{DocumentValue, ScalarValue};
/// use flatcfg::engine::flatten;
///
/// let doc = DocumentValue::mapping([(
///     "a",
///     DocumentValue::mapping([("b", DocumentValue::from(1)), ("c", DocumentValue::from(true))]),
/// )]);
/// let props = flatten(&doc);
///
/// assert_eq!(props.len(), 2);
/// assert_eq!(props.get("a.b"), Some(&ScalarValue::Integer(1)));
/// assert_eq!(props.get("a.c"), Some(&ScalarValue::Boolean(true)));
/// ```
pub fn flatten(document: &DocumentValue) -> PropertyMap {
    let mut props = PropertyMap::new();
    flatten_into(document, "", &mut props);
    props
}

fn flatten_into(value: &DocumentValue, path: &str, props: &mut PropertyMap) {
    match value {
        DocumentValue::Mapping(map) => {
            for (key, child) in map {
                flatten_into(child, &join(path, key), props);
            }
        }
        DocumentValue::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, &join(path, &index.to_string()), props);
            }
        }
        DocumentValue::Scalar(scalar) => {
            props.set(path, scalar.clone());
        }
    }
}
