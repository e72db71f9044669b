//! Error types for the codecs and serde bridges.
//!
//! [`flatten`](crate::flatten) and [`unflatten`](crate::unflatten) never fail:
//! entries that cannot be placed are dropped. Errors come from the layers on
//! top of them:
//!
//! - **Malformed lines**: a properties line that is not `key=value`
//! - **Unsupported operations**: a value the target format cannot represent
//! - **Codec errors**: JSON or TOML parser/writer failures
//! - **I/O errors**: file reading/writing failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_flat::{properties, Error};
//!
//! let err = properties::from_str("name=app\nnot a pair\n").unwrap_err();
//! assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
//! assert!(err.to_string().contains("not a pair"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A properties line that does not match `<key>=<value>`
    #[error("malformed line {line}: \"<key>=<value>\" does not match \"{content}\"")]
    MalformedLine { line: usize, content: String },

    /// The target format cannot represent the value
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Unsupported type for serialization into a value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Failure reported by an underlying text format
    #[error("{format} error: {msg}")]
    Codec { format: &'static str, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed-line error. `line` is 1-based.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flat::Error;
    ///
    /// let err = Error::malformed_line(3, "oops");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn malformed_line(line: usize, content: &str) -> Self {
        Error::MalformedLine {
            line,
            content: content.to_string(),
        }
    }

    pub fn unsupported(msg: &str) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates an unsupported type error for shapes a `Value` cannot hold.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Wraps a JSON/TOML failure, keeping the format name for the message.
    pub fn codec<T: fmt::Display>(format: &'static str, err: T) -> Self {
        Error::Codec {
            format,
            msg: err.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_names_format() {
        let err = Error::codec("TOML", "expected `=`");
        assert_eq!(err.to_string(), "TOML error: expected `=`");
    }

    #[test]
    fn test_unsupported_message() {
        let err = Error::unsupported("binary payload at `key`");
        assert_eq!(
            err.to_string(),
            "unsupported operation: binary payload at `key`"
        );
    }
}
