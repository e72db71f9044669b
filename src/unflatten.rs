//! Flat mapping to nested value.
//!
//! Reconstruction runs in two passes:
//!
//! 1. **Normalization**: entries whose value is itself a non-empty array or
//!    object are re-flattened with the same delimiter and key transform, and
//!    their keys are spliced in under the outer key.
//! 2. **Reconstruction**: every key is split into segments and walked from a
//!    fresh root, creating containers on the way. A segment that is a
//!    canonical decimal index (`0`, `1`, `42`, never `01`) selects a sequence
//!    slot unless `force_mapping` is set.
//!
//! Sequence slots are kept sparse while building. A sequence becomes an
//! [`Value::Array`] only if its indices are exactly `0..len`; otherwise it
//! comes out as an object keyed by the decimal indices, so flattening the
//! result gives back the same keys.
//!
//! Entries that cannot be placed are dropped rather than reported:
//!
//! - any segment equal to [`RESERVED_KEY`] drops the whole entry;
//! - a path running through an existing leaf is dropped unless `overwrite`
//!   is set, in which case the leaf is replaced by a container.
//!
//! The last segment is always assigned, so a shorter key that arrives after a
//! longer one replaces the container built for it.
//!
//! ```rust
//! use serde_flat::{unflatten, value};
//!
//! let flat = value!({ "x.y": 2, "z": 4 });
//! let nested = unflatten(flat.as_object().unwrap());
//! assert_eq!(nested, value!({ "x": { "y": 2 }, "z": 4 }));
//! ```

use crate::{flatten_with_options, Map, UnflattenOptions, Value};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Segment that would alias an object's prototype slot in JavaScript-style
/// config consumers. Never assigned.
pub const RESERVED_KEY: &str = "__proto__";

/// Unflattens `flat` with default options.
#[must_use]
pub fn unflatten(flat: &Map) -> Value {
    unflatten_with_options(flat, &UnflattenOptions::default())
}

/// Rebuilds a nested value from a flat mapping.
///
/// The result is an [`Value::Array`] when `force_mapping` is off and the
/// top-level keys are exactly the indices `0..n`; otherwise it is an
/// [`Value::Object`]. Empty input yields an empty object.
///
/// # Examples
///
/// ```rust
/// use serde_flat::{unflatten, unflatten_with_options, value, UnflattenOptions};
///
/// let flat = value!({ "0": "x", "1": "y" });
/// let flat = flat.as_object().unwrap();
///
/// assert_eq!(unflatten(flat), value!(["x", "y"]));
///
/// let options = UnflattenOptions::new().with_force_mapping(true);
/// assert_eq!(unflatten_with_options(flat, &options), value!({ "0": "x", "1": "y" }));
/// ```
#[must_use]
pub fn unflatten_with_options(flat: &Map, options: &UnflattenOptions) -> Value {
    let mut root = Node::Map(IndexMap::new());
    for (key, value) in normalize(flat, options) {
        insert_path(&mut root, &key, value, options);
    }
    finish_root(root, options.force_mapping)
}

fn normalize(flat: &Map, options: &UnflattenOptions) -> Map {
    let reflatten = options.reflatten_options();
    let mut normalized = Map::with_capacity(flat.len());

    for (key, value) in flat {
        if value.kind().is_container() && !value.is_empty_container() {
            let nested = flatten_with_options(value, &reflatten);
            trace!(key = %key, entries = nested.len(), "re-flattening nested entry");
            normalized.extend(
                nested
                    .into_iter()
                    .map(|(sub, leaf)| (format!("{}{}{}", key, options.delimiter, sub), leaf)),
            );
        } else {
            normalized.insert(key.clone(), value.clone());
        }
    }
    normalized
}

fn insert_path(root: &mut Node, key: &str, value: Value, options: &UnflattenOptions) {
    let segments: Vec<Segment> = key
        .split(options.delimiter.as_str())
        .map(|raw| Segment::parse(options.transform(raw).into_owned(), options.force_mapping))
        .collect();

    if segments.iter().any(Segment::is_reserved) {
        debug!(key, "dropping entry with reserved segment");
        return;
    }
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut cursor = root;
    for (position, segment) in parents.iter().enumerate() {
        cursor.make_addressable(segment);

        let slot = match cursor.child_ref(segment) {
            None => Slot::Vacant,
            Some(node) if node.is_container() => Slot::Container,
            Some(_) => Slot::Leaf,
        };
        let child = match slot {
            Slot::Container => cursor.child_mut(segment),
            Slot::Leaf if !options.overwrite => {
                debug!(key, segment = %segment.as_key(), "dropping entry that runs through a leaf");
                return;
            }
            Slot::Leaf | Slot::Vacant => {
                cursor.put(segment, Node::empty_for(&segments[position + 1]))
            }
        };

        match child {
            Some(child) => cursor = child,
            None => return,
        }
    }

    cursor.make_addressable(last);
    cursor.put(last, Node::from_value(value));
}

fn finish_root(root: Node, force_mapping: bool) -> Value {
    match root {
        Node::Map(map)
            if !force_mapping && !map.is_empty() && map.keys().all(|k| parse_index(k).is_some()) =>
        {
            let items = map
                .into_iter()
                .filter_map(|(key, node)| parse_index(&key).map(|index| (index, node)))
                .collect();
            sequence_value(items)
        }
        other => other.into_value(),
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment.len() == 1 || !segment.starts_with('0'));
    if !canonical {
        return None;
    }
    segment.parse::<usize>().ok()
}

/// Dense `0..len` indices give an array, anything sparser an index-keyed object.
fn sequence_value(items: BTreeMap<usize, Node>) -> Value {
    let dense = items
        .keys()
        .enumerate()
        .all(|(position, index)| position == *index);
    if dense {
        Value::Array(items.into_values().map(Node::into_value).collect())
    } else {
        trace!(len = items.len(), "sparse sequence kept as object");
        Value::Object(
            items
                .into_iter()
                .map(|(index, node)| (index.to_string(), node.into_value()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Index(usize),
    Name(String),
}

impl Segment {
    fn parse(raw: String, force_mapping: bool) -> Self {
        match parse_index(&raw) {
            Some(index) if !force_mapping => Segment::Index(index),
            _ => Segment::Name(raw),
        }
    }

    fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    fn is_reserved(&self) -> bool {
        matches!(self, Segment::Name(name) if name == RESERVED_KEY)
    }

    fn as_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Index(index) => Cow::Owned(index.to_string()),
            Segment::Name(name) => Cow::Borrowed(name),
        }
    }
}

enum Slot {
    Vacant,
    Leaf,
    Container,
}

/// Working tree. Sequences are keyed by index so memory follows the number
/// of entries, not the size of the largest index.
enum Node {
    Leaf(Value),
    Seq(BTreeMap<usize, Node>),
    Map(IndexMap<String, Node>),
}

impl Node {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                Node::Seq(
                    items
                        .into_iter()
                        .map(Node::from_value)
                        .enumerate()
                        .collect(),
                )
            }
            Value::Object(map) => Node::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Node::from_value(v)))
                    .collect(),
            ),
            leaf => Node::Leaf(leaf),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Node::Leaf(value) => value,
            Node::Seq(items) => sequence_value(items),
            Node::Map(map) => Value::Object(
                map.into_iter()
                    .map(|(k, node)| (k, node.into_value()))
                    .collect(),
            ),
        }
    }

    fn empty_for(next: &Segment) -> Self {
        if next.is_index() {
            Node::Seq(BTreeMap::new())
        } else {
            Node::Map(IndexMap::new())
        }
    }

    fn is_container(&self) -> bool {
        !matches!(self, Node::Leaf(_))
    }

    /// A sequence addressed by name turns into a mapping keyed by its indices.
    fn make_addressable(&mut self, segment: &Segment) {
        if let Node::Seq(items) = self {
            if !segment.is_index() {
                let items = std::mem::take(items);
                *self = Node::Map(
                    items
                        .into_iter()
                        .map(|(index, node)| (index.to_string(), node))
                        .collect(),
                );
            }
        }
    }

    fn child_ref(&self, segment: &Segment) -> Option<&Node> {
        match (self, segment) {
            (Node::Seq(items), Segment::Index(index)) => items.get(index),
            (Node::Map(map), segment) => map.get(segment.as_key().as_ref()),
            _ => None,
        }
    }

    fn child_mut(&mut self, segment: &Segment) -> Option<&mut Node> {
        match (self, segment) {
            (Node::Seq(items), Segment::Index(index)) => items.get_mut(index),
            (Node::Map(map), segment) => map.get_mut(segment.as_key().as_ref()),
            _ => None,
        }
    }

    fn put(&mut self, segment: &Segment, node: Node) -> Option<&mut Node> {
        match (self, segment) {
            (Node::Seq(items), Segment::Index(index)) => {
                items.insert(*index, node);
                items.get_mut(index)
            }
            (Node::Map(map), segment) => match map.entry(segment.as_key().into_owned()) {
                Entry::Occupied(mut entry) => {
                    entry.insert(node);
                    Some(entry.into_mut())
                }
                Entry::Vacant(entry) => Some(entry.insert(node)),
            },
            _ => None,
        }
    }
}
