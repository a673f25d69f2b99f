// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat property map to document tree.
//!
//! Keys are first folded into an ordered tree of named nodes, which is then
//! materialized as nested mappings. Numeric segments are never turned back into
//! sequences: `a.0` rebuilds as `{"a": {"0": ...}}`.

use crate::domain::property_key::split;
use crate::domain::{ConfigError, DocumentValue, PropertyMap, Result, ScalarValue};
use std::collections::BTreeMap;

/// Transient reconstruction node, owned by a single `unflatten` call.
#[derive(Debug, Default)]
struct Node {
    name: String,
    children: Vec<Node>,
    value: Option<ScalarValue>,
}

impl Node {
    fn named(name: &str) -> Self {
        Node {
            name: name.to_string(),
            ..Node::default()
        }
    }

    /// Returns the child with this name, creating it if absent.
    fn child_mut(&mut self, name: &str) -> &mut Node {
        match self.children.iter().position(|c| c.name == name) {
            Some(index) => &mut self.children[index],
            None => {
                self.children.push(Node::named(name));
                let last = self.children.len() - 1;
                &mut self.children[last]
            }
        }
    }

    fn into_document(self) -> DocumentValue {
        if self.children.is_empty() {
            return DocumentValue::Scalar(self.value.unwrap_or_default());
        }
        DocumentValue::Mapping(
            self.children
                .into_iter()
                .map(|child| (child.name.clone(), child.into_document()))
                .collect::<BTreeMap<_, _>>(),
        )
    }
}

/// Rebuilds a document tree from dot-path properties.
///
/// The result is always a mapping at the root.
///
/// # Errors
///
/// Returns [`ConfigError::AmbiguousPath`] when one key is a strict dot-prefix of
/// another (for example both `a` and `a.b`), since the value at `a` would
/// otherwise be silently lost. The outcome does not depend on iteration order.
///
/// # Examples
///
/// ```
/// use flatcfg::domain::{DocumentValue, PropertyMap};
/// use flatcfg::engine::unflatten;
///
/// let props: PropertyMap = [("a.0", "x"), ("a.1", "y")].into_iter().collect();
/// let doc = unflatten(&props).unwrap();
///
/// let expected = DocumentValue::mapping([(
///     "a",
///     DocumentValue::mapping([("0", DocumentValue::from("x")), ("1", DocumentValue::from("y"))]),
/// )]);
/// assert_eq!(doc, expected);
/// ```
pub fn unflatten(props: &PropertyMap) -> Result<DocumentValue> {
    let mut root = Node::default();

    for (key, value) in props {
        let mut node = &mut root;
        for (depth, segment) in split(key).into_iter().enumerate() {
            // A leaf stored above this point would be discarded by the new child.
            if node.value.is_some() {
                return Err(ambiguous(key, depth));
            }
            node = node.child_mut(segment);
        }
        if !node.children.is_empty() {
            return Err(ConfigError::AmbiguousPath { path: key.clone() });
        }
        node.value = Some(value.clone());
    }

    if root.children.is_empty() {
        return Ok(DocumentValue::empty_mapping());
    }
    Ok(root.into_document())
}

/// Names the ancestor of `key` that already holds a leaf, `depth` segments deep.
fn ambiguous(key: &str, depth: usize) -> ConfigError {
    let path = split(key)[..depth].join(".");
    ConfigError::AmbiguousPath { path }
}
