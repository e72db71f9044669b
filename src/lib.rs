//! # serde_flat
//!
//! Flattening and unflattening of nested key/value data.
//!
//! ## What does it do?
//!
//! [`flatten`] turns a tree of objects and arrays into a single-level map
//! whose keys are delimiter-joined paths. [`unflatten`] reverses it: numeral
//! path segments become array positions, everything else becomes object keys.
//!
//! ```rust
//! use serde_flat::{flatten, unflatten, value};
//!
//! let nested = value!({ "x": { "y": 2 }, "z": 4 });
//! let flat = flatten(&nested);
//! assert_eq!(flat.get("x.y"), Some(&value!(2)));
//! assert_eq!(flat.get("z"), Some(&value!(4)));
//!
//! assert_eq!(unflatten(&flat), nested);
//! ```
//!
//! ## Key Features
//!
//! - **Configurable paths**: custom delimiter, depth bound, key transform and
//!   array-safe mode through [`FlattenOptions`]
//! - **Permissive reconstruction**: conflicting entries are dropped rather than
//!   failing, with [`UnflattenOptions`] controlling overwrite and index inference
//! - **Reserved-key guard**: any path running through `__proto__` is ignored
//! - **Serde bridges**: any `Serialize` type flattens with [`to_flat_map`], any
//!   `Deserialize` type reads back with [`from_flat_map`]
//! - **Config files**: JSON, TOML and `key=value` properties through
//!   [`ConfigFormat`]
//!
//! ## Options
//!
//! ```rust
//! use serde_flat::{flatten_with_options, value, FlattenOptions};
//!
//! let options = FlattenOptions::new()
//!     .with_delimiter("/")
//!     .with_array_safe(true);
//! let flat = flatten_with_options(&value!({ "a": { "b": [1, 2] } }), &options);
//! assert_eq!(flat.get("a/b"), Some(&value!([1, 2])));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: entries dropped during reconstruction
//! at `debug`, per-entry steps at `trace`, and config file loads and saves at
//! `debug`. No subscriber is installed.

pub mod config;
pub mod de;
pub mod error;
pub mod flatten;
pub mod kind;
pub mod lookup;
pub mod macros;
pub mod map;
pub mod options;
pub mod properties;
pub mod ser;
pub mod unflatten;
pub mod value;

pub use config::ConfigFormat;
pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use flatten::{flatten, flatten_with_options};
pub use kind::{classify, Kind};
pub use lookup::get_by_path;
pub use map::Map;
pub use options::{Delimiter, FlattenOptions, KeyTransform, UnflattenOptions};
pub use ser::ValueSerializer;
pub use unflatten::{unflatten, unflatten_with_options, RESERVED_KEY};
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_flat::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. a map with
/// non-scalar keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_flat::{from_value, value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(value!({ "x": 1, "y": 2 })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Serialize any `T: Serialize` and flatten it with default options.
///
/// # Examples
///
/// ```rust
/// use serde_flat::to_flat_map;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Db { host: String, ports: Vec<u16> }
///
/// let flat = to_flat_map(&Db { host: "db".into(), ports: vec![5432, 5433] }).unwrap();
/// let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["host", "ports.0", "ports.1"]);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_flat_map<T>(value: &T) -> Result<Map>
where
    T: ?Sized + Serialize,
{
    to_flat_map_with_options(value, &FlattenOptions::default())
}

/// Serialize any `T: Serialize` and flatten it with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_flat_map_with_options<T>(value: &T, options: &FlattenOptions) -> Result<Map>
where
    T: ?Sized + Serialize,
{
    Ok(flatten_with_options(&to_value(value)?, options))
}

/// Unflatten a flat map with default options and deserialize `T` from it.
///
/// # Examples
///
/// ```rust
/// use serde_flat::{from_flat_map, Map, Value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Db { host: String, ports: Vec<u16> }
///
/// let mut flat = Map::new();
/// flat.insert("host".to_string(), Value::from("db"));
/// flat.insert("ports.0".to_string(), Value::from(5432));
///
/// let db: Db = from_flat_map(&flat).unwrap();
/// assert_eq!(db, Db { host: "db".into(), ports: vec![5432] });
/// ```
///
/// # Errors
///
/// Returns an error if the reconstructed value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_flat_map<T>(flat: &Map) -> Result<T>
where
    T: DeserializeOwned,
{
    from_flat_map_with_options(flat, &UnflattenOptions::default())
}

/// Unflatten a flat map with custom options and deserialize `T` from it.
///
/// # Errors
///
/// Returns an error if the reconstructed value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_flat_map_with_options<T>(flat: &Map, options: &UnflattenOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(unflatten_with_options(flat, options))
}
