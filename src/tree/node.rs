//! The metadata tree node type.
//!
//! Every decoded chunk contributes nodes to one tree: scalars for leaf
//! values, insertion-ordered maps for named groups, and lists for the
//! positional containers that XMP extraction builds before flattening.
//! After extraction finishes, every reachable node is a scalar or a map;
//! lists only exist transiently (see [`crate::tree::ops::flatten`]).

use indexmap::IndexMap;
use serde::Serialize;

/// A single value in the metadata tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A leaf text value
    Scalar(String),
    /// Named children, in insertion order
    Map(IndexMap<String, Node>),
    /// Positional children; collapsed away before the tree is frozen
    List(Vec<Node>),
}

impl Node {
    /// Create an empty map node.
    pub fn empty_map() -> Self {
        Node::Map(IndexMap::new())
    }

    /// Create a scalar node from anything stringy.
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(value.into())
    }

    /// Whether this node is a map or a list.
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Map(_) | Node::List(_))
    }

    /// Whether this node holds no entries at all.
    ///
    /// Scalars are never empty, even when the string is.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Scalar(_) => false,
            Node::Map(map) => map.is_empty(),
            Node::List(items) => items.is_empty(),
        }
    }

    /// The scalar text, if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The child map, if this node is a map.
    pub fn as_map(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Descend one level: maps by key, lists by decimal index.
    pub fn child(&self, segment: &str) -> Option<&Node> {
        match self {
            Node::Map(map) => map.get(segment),
            Node::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            Node::Scalar(_) => None,
        }
    }
}

/// Collect the tree into `(colon-joined-path, display-value)` rows.
///
/// A list whose items are all scalars becomes a single comma-joined row,
/// and so does a map keyed by sequential decimal integers from zero (the
/// shape list/map merges produce); any other composite recurses with its
/// key (or index) appended to the path prefix.
pub fn rows(map: &IndexMap<String, Node>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    walk(map, "", &mut out);
    out
}

fn walk(map: &IndexMap<String, Node>, prefix: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let path = join_path(prefix, key);
        push_value(&path, value, out);
    }
}

fn push_value(path: &str, value: &Node, out: &mut Vec<(String, String)>) {
    match value {
        Node::Scalar(s) => out.push((path.to_string(), s.clone())),
        Node::Map(map) => {
            if let Some(joined) = positional_scalar_join(map) {
                out.push((path.to_string(), joined));
            } else {
                walk(map, path, out);
            }
        },
        Node::List(items) => {
            if items.iter().all(|item| matches!(item, Node::Scalar(_))) {
                let joined = items
                    .iter()
                    .filter_map(Node::as_scalar)
                    .collect::<Vec<_>>()
                    .join(",");
                out.push((path.to_string(), joined));
            } else {
                for (index, item) in items.iter().enumerate() {
                    let indexed = join_path(path, &index.to_string());
                    push_value(&indexed, item, out);
                }
            }
        },
    }
}

/// The comma-joined values of a map keyed `"0".."n-1"` whose values are
/// all scalars, if this is one.
fn positional_scalar_join(map: &IndexMap<String, Node>) -> Option<String> {
    if map.is_empty() {
        return None;
    }
    let mut parts = Vec::with_capacity(map.len());
    for (index, (key, value)) in map.iter().enumerate() {
        if key != &index.to_string() {
            return None;
        }
        parts.push(value.as_scalar()?);
    }
    Some(parts.join(","))
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.trim().to_string()
    } else {
        format!("{prefix}:{}", key.trim())
    }
}
