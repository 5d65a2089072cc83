//! Generic merge and flatten transforms over metadata trees.
//!
//! These two operations are shared by every extraction path: XMP node
//! folding, attribute merging, and the EXIF collaborator all funnel
//! through [`merge`], and the finished XMP result goes through
//! [`flatten`] exactly once before it is installed into the tree.

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::node::Node;

/// Merge `incoming` into `base`.
///
/// Keys absent from `base` are inserted as-is. When both sides are
/// composite the merge recurses (lists merge index-wise, with extra
/// items appended). Two unequal scalars concatenate as
/// `base + "," + incoming`, existing value first; equal scalars are left
/// unchanged. This comma-join is the only conflict rule in the system:
/// multi-valued XMP properties stay visible instead of silently losing
/// values.
///
/// Maps and lists merge with each other through positional string keys
/// (`"0"`, `"1"`, …). When a scalar meets a composite the existing value
/// wins.
pub fn merge(base: &mut Node, incoming: Node) {
    match (base, incoming) {
        (Node::Map(base), Node::Map(incoming)) => merge_map(base, incoming),
        (Node::List(base), Node::List(incoming)) => {
            for (index, item) in incoming.into_iter().enumerate() {
                match base.get_mut(index) {
                    Some(existing) => merge(existing, item),
                    None => base.push(item),
                }
            }
        },
        (Node::Scalar(base), Node::Scalar(incoming)) => {
            if *base != incoming {
                base.push(',');
                base.push_str(&incoming);
            }
        },
        // A list folds into a map under its positional keys, the way the
        // extraction's keyless appends do.
        (Node::Map(base), Node::List(incoming)) => {
            for (index, item) in incoming.into_iter().enumerate() {
                match base.entry(index.to_string()) {
                    Entry::Occupied(entry) => merge(entry.into_mut(), item),
                    Entry::Vacant(entry) => {
                        entry.insert(item);
                    },
                }
            }
        },
        (base @ Node::List(_), Node::Map(incoming)) => {
            let Node::List(items) = std::mem::replace(base, Node::empty_map()) else {
                unreachable!()
            };
            let mut map: IndexMap<String, Node> = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect();
            merge_map(&mut map, incoming);
            *base = Node::Map(map);
        },
        // Scalar vs composite: the existing value wins.
        _ => {},
    }
}

/// Merge every entry of `incoming` into `base` with the [`merge`] rule.
pub fn merge_map(base: &mut IndexMap<String, Node>, incoming: IndexMap<String, Node>) {
    for (key, value) in incoming {
        match base.entry(key) {
            Entry::Occupied(entry) => merge(entry.into_mut(), value),
            Entry::Vacant(entry) => {
                entry.insert(value);
            },
        }
    }
}

/// Collapse single-item containers throughout a composite node.
///
/// Any value that is a one-element list (or a map whose only entry is
/// keyed `"0"`) is replaced by its sole element; the walk then recurses
/// into the replacement. Two-element lists and larger are left intact.
/// The node itself is never collapsed, only its descendants — matching
/// the way the XMP result keeps its top-level keys.
pub fn flatten(node: &mut Node) {
    match node {
        Node::Map(map) => {
            for value in map.values_mut() {
                flatten_value(value);
            }
        },
        Node::List(items) => {
            for item in items.iter_mut() {
                flatten_value(item);
            }
        },
        Node::Scalar(_) => {},
    }
}

fn flatten_value(node: &mut Node) {
    if let Some(inner) = take_singleton(node) {
        *node = inner;
        if node.is_composite() {
            flatten(node);
        }
    } else {
        flatten(node);
    }
}

/// The sole element of a single-item container, if this is one.
fn take_singleton(node: &mut Node) -> Option<Node> {
    match node {
        Node::List(items) if items.len() == 1 => items.pop(),
        Node::Map(map) if map.len() == 1 && map.contains_key("0") => {
            map.shift_remove("0")
        },
        _ => None,
    }
}
