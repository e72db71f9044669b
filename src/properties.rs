//! Java-like `key=value` properties text.
//!
//! Each non-blank line holds one `<key>=<value>` pair. Keys are made of ASCII
//! letters, digits, dots and hyphens; the value is everything after the first
//! `=` and must not be empty. Dotted keys nest through
//! [`unflatten`](crate::unflatten):
//!
//! ```text
//! hallo.welt=Hallo Welt
//! my.name=Marius
//! my.age=3
//! ```
//!
//! becomes `{ "hallo": { "welt": "Hallo Welt" }, "my": { "name": "Marius", "age": "3" } }`.
//! Values stay strings; no number or boolean conversion takes place. Writing
//! is therefore lossy for numbers and booleans, which come back as their text,
//! while values that would come back as a different string (null, empty
//! containers, empty or multi-line strings) are refused.
//!
//! ```rust
//! use serde_flat::{properties, value};
//!
//! let config = properties::from_str("server.host=localhost\nserver.port=8080\n").unwrap();
//! assert_eq!(config, value!({ "server": { "host": "localhost", "port": "8080" } }));
//!
//! let text = properties::to_string(&config).unwrap();
//! assert_eq!(text, "server.host=localhost\nserver.port=8080");
//! ```

use crate::{flatten, unflatten, Error, Map, Result, Value};
use tracing::debug;

/// Parses properties text into a nested value.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] for the first non-blank line that is not
/// a valid `<key>=<value>` pair.
pub fn from_str(input: &str) -> Result<Value> {
    let mut flat = Map::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = parse_line(line).ok_or_else(|| Error::malformed_line(index + 1, line))?;
        flat.insert(key.to_string(), Value::from(value));
    }

    debug!(entries = flat.len(), "parsed properties");
    Ok(unflatten(&flat))
}

/// Writes a nested value as properties text, one flattened leaf per line.
///
/// # Errors
///
/// Returns [`Error::Unsupported`] when the value has no properties form: a
/// top-level scalar, a binary payload, a null, an empty array or object, a key
/// outside `[A-Za-z0-9.-]`, or a value that is empty or spans several lines.
pub fn to_string(value: &Value) -> Result<String> {
    if !value.kind().is_container() {
        return Err(Error::unsupported(
            "properties can only hold an object or array at the top level",
        ));
    }

    let mut lines = Vec::new();
    for (key, leaf) in flatten(value).iter() {
        if !is_valid_key(key) {
            return Err(Error::unsupported(&format!(
                "key `{}` cannot be written as a property",
                key
            )));
        }
        let rendered = render(key, leaf)?;
        lines.push(format!("{}={}", key, rendered));
    }
    Ok(lines.join("\n"))
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    if is_valid_key(key) && !value.is_empty() {
        Some((key, value))
    } else {
        None
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

fn render(key: &str, leaf: &Value) -> Result<String> {
    let rendered = match leaf {
        Value::String(s) => s.clone(),
        Value::Bytes(_) => {
            return Err(Error::unsupported(&format!(
                "binary payload at `{}` cannot be written as a property",
                key
            )))
        }
        Value::Null | Value::Array(_) | Value::Object(_) => {
            return Err(Error::unsupported(&format!(
                "`{}` holds {} which would read back as text",
                key, leaf
            )))
        }
        other => other.to_string(),
    };

    if rendered.is_empty() || rendered.contains('\n') || rendered.contains('\r') {
        return Err(Error::unsupported(&format!(
            "value at `{}` must be a non-empty single line",
            key
        )));
    }
    Ok(rendered)
}
