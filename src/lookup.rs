//! Dotted-path lookup.
//!
//! A lookup is answered by flattening the value with default options and
//! reading one key, so it sees exactly the paths [`flatten`] would produce:
//! leaves and empty containers, never non-empty intermediate nodes.

use crate::{flatten, Value};

/// Returns the leaf stored under `path` (default `.` delimiter).
///
/// # Examples
///
/// ```rust
/// use serde_flat::{get_by_path, value, Value};
///
/// let config = value!({ "db": { "hosts": ["a", "b"], "port": 5432 } });
///
/// assert_eq!(get_by_path(&config, "db.port"), Some(Value::from(5432)));
/// assert_eq!(get_by_path(&config, "db.hosts.1"), Some(Value::from("b")));
/// assert_eq!(get_by_path(&config, "db"), None);
/// ```
#[must_use]
pub fn get_by_path(value: &Value, path: &str) -> Option<Value> {
    flatten(value).remove(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_missing_path() {
        let config = value!({ "a": { "b": 1 } });
        assert_eq!(get_by_path(&config, "a.c"), None);
        assert_eq!(get_by_path(&config, ""), None);
    }

    #[test]
    fn test_empty_container_is_reachable() {
        let config = value!({ "a": { "list": [] } });
        assert_eq!(get_by_path(&config, "a.list"), Some(value!([])));
    }

    #[test]
    fn test_scalar_root_has_no_paths() {
        assert_eq!(get_by_path(&Value::from(3), ""), None);
    }
}
