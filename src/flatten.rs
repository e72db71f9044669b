//! Nested value to flat mapping.
//!
//! The walk is depth-first and pre-order. The root's children sit at depth 1;
//! a child container is descended only while the current depth is below
//! `max_depth`, so no produced key has more than `max_depth` segments.
//!
//! ```rust
//! use serde_flat::{flatten, value};
//!
//! let flat = flatten(&value!({ "x": { "y": 2 }, "z": 4 }));
//! let keys: Vec<_> = flat.keys().cloned().collect();
//! assert_eq!(keys, vec!["x.y", "z"]);
//! ```

use crate::kind::Kind;
use crate::{FlattenOptions, Map, Value};
use std::borrow::Cow;
use tracing::trace;

/// Flattens `value` with default options.
#[must_use]
pub fn flatten(value: &Value) -> Map {
    flatten_with_options(value, &FlattenOptions::default())
}

/// Flattens `value` into a single-level map of delimited paths to leaves.
///
/// A root that is not a container has no paths and yields an empty map.
///
/// # Examples
///
/// ```rust
/// use serde_flat::{flatten_with_options, value, FlattenOptions};
///
/// let data = value!({ "a": [1, 2, 3] });
///
/// let flat = flatten_with_options(&data, &FlattenOptions::new().with_array_safe(true));
/// assert_eq!(flat.get("a"), Some(&value!([1, 2, 3])));
/// ```
#[must_use]
pub fn flatten_with_options(value: &Value, options: &FlattenOptions) -> Map {
    let mut flattener = Flattener {
        options,
        output: Map::new(),
    };
    if value.kind().is_container() {
        flattener.step(value, None, 1);
    } else {
        trace!(kind = ?value.kind(), "flatten root is a leaf, nothing to flatten");
    }
    flattener.output
}

struct Flattener<'a> {
    options: &'a FlattenOptions,
    output: Map,
}

impl Flattener<'_> {
    fn step(&mut self, node: &Value, prefix: Option<&str>, depth: usize) {
        for (segment, child) in children(node) {
            let segment = self.options.transform(&segment);
            let path = match prefix {
                Some(prefix) => format!("{}{}{}", prefix, self.options.delimiter, segment),
                None => segment.into_owned(),
            };

            if self.descends(child, depth) {
                self.step(child, Some(&path), depth + 1);
            } else {
                self.output.insert(path, child.clone());
            }
        }
    }

    fn descends(&self, child: &Value, depth: usize) -> bool {
        match child.kind() {
            Kind::Sequence if self.options.array_safe => false,
            Kind::Sequence | Kind::Mapping => {
                !child.is_empty_container()
                    && self.options.max_depth.map_or(true, |max| depth < max.get())
            }
            Kind::Scalar | Kind::Opaque => false,
        }
    }
}

fn children(node: &Value) -> Box<dyn Iterator<Item = (Cow<'_, str>, &Value)> + '_> {
    match node {
        Value::Array(arr) => Box::new(
            arr.iter()
                .enumerate()
                .map(|(index, child)| (Cow::Owned(index.to_string()), child)),
        ),
        Value::Object(obj) => Box::new(
            obj.iter()
                .map(|(key, child)| (Cow::Borrowed(key.as_str()), child)),
        ),
        _ => Box::new(std::iter::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn keys(map: &Map) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_nested_objects() {
        let flat = flatten(&value!({ "a": { "b": { "c": 1 } }, "d": true }));
        assert_eq!(keys(&flat), vec!["a.b.c", "d"]);
        assert_eq!(flat.get("a.b.c"), Some(&Value::from(1)));
    }

    #[test]
    fn test_arrays_are_indexed() {
        let flat = flatten(&value!({ "a": [1, 2, 3] }));
        assert_eq!(keys(&flat), vec!["a.0", "a.1", "a.2"]);
        assert_eq!(flat.get("a.2"), Some(&Value::from(3)));
    }

    #[test]
    fn test_root_array() {
        let flat = flatten(&value!([{ "a": 1 }, "b"]));
        assert_eq!(keys(&flat), vec!["0.a", "1"]);
    }

    #[test]
    fn test_root_array_ignores_array_safe() {
        let options = FlattenOptions::new().with_array_safe(true);
        let flat = flatten_with_options(&value!([[1], 2]), &options);
        assert_eq!(flat.get("0"), Some(&value!([1])));
        assert_eq!(flat.get("1"), Some(&Value::from(2)));
    }

    #[test]
    fn test_leaf_root_is_empty() {
        assert!(flatten(&Value::from("text")).is_empty());
        assert!(flatten(&Value::Null).is_empty());
        assert!(flatten(&Value::Bytes(vec![1, 2])).is_empty());
    }

    #[test]
    fn test_empty_containers_are_leaves() {
        let flat = flatten(&value!({ "a": {}, "b": [], "c": { "d": [] } }));
        assert_eq!(flat.get("a"), Some(&value!({})));
        assert_eq!(flat.get("b"), Some(&value!([])));
        assert_eq!(flat.get("c.d"), Some(&value!([])));
    }

    #[test]
    fn test_bytes_are_not_descended() {
        let mut obj = Map::new();
        obj.insert("blob".to_string(), Value::Bytes(vec![7, 8, 9]));
        let flat = flatten(&Value::Object(obj));
        assert_eq!(keys(&flat), vec!["blob"]);
        assert_eq!(flat.get("blob"), Some(&Value::Bytes(vec![7, 8, 9])));
    }

    #[test]
    fn test_max_depth_truncates() {
        let data = value!({ "a": { "b": { "c": { "d": 1 } } }, "e": 2 });
        let options = FlattenOptions::new().with_max_depth(2);
        let flat = flatten_with_options(&data, &options);

        assert_eq!(keys(&flat), vec!["a.b", "e"]);
        assert_eq!(flat.get("a.b"), Some(&value!({ "c": { "d": 1 } })));
    }

    #[test]
    fn test_max_depth_one_keeps_top_level() {
        let data = value!({ "a": { "b": 1 }, "c": [1] });
        let flat = flatten_with_options(&data, &FlattenOptions::new().with_max_depth(1));
        assert_eq!(flat.get("a"), Some(&value!({ "b": 1 })));
        assert_eq!(flat.get("c"), Some(&value!([1])));
    }

    #[test]
    fn test_custom_delimiter_and_transform() {
        let data = value!({ "Server": { "Port": 80 } });
        let options = FlattenOptions::new()
            .with_delimiter("__")
            .with_transform_key(|segment| segment.to_lowercase());
        let flat = flatten_with_options(&data, &options);
        assert_eq!(keys(&flat), vec!["server__port"]);
    }

    #[test]
    fn test_repeated_delimiters_are_kept() {
        let data = value!({ "a": { "": { "b": 1 } }, "c.": { "d": 2 } });
        let flat = flatten(&data);
        assert_eq!(keys(&flat), vec!["a..b", "c..d"]);
    }
}
