//! Reading and writing whole configuration files.
//!
//! [`ConfigFormat`] dispatches between JSON, TOML and properties text. All
//! three land in the same [`Value`] tree, so a file in one format can be
//! flattened, looked up with dotted paths, or rewritten in another format.

use std::fmt;
use std::path::Path;

use crate::{properties, Error, Result, Value};
use tracing::debug;

/// A text format a configuration file can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Json,
    Toml,
    /// `key=value` lines, see [`properties`].
    Properties,
}

impl ConfigFormat {
    /// Picks the format from a file extension (`json`, `toml`, `properties`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if the path has no extension or an
    /// unknown one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flat::ConfigFormat;
    ///
    /// assert_eq!(ConfigFormat::from_path("app.toml").unwrap(), ConfigFormat::Toml);
    /// assert!(ConfigFormat::from_path("app.yaml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("properties") => Ok(ConfigFormat::Properties),
            _ => Err(Error::unsupported(&format!(
                "cannot infer config format from {}",
                path.display()
            ))),
        }
    }

    /// Parses text in this format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] for invalid JSON or TOML and
    /// [`Error::MalformedLine`] for invalid properties text.
    pub fn from_str(self, input: &str) -> Result<Value> {
        match self {
            ConfigFormat::Json => serde_json::from_str(input).map_err(|e| Error::codec("JSON", e)),
            ConfigFormat::Toml => toml::from_str(input).map_err(|e| Error::codec("TOML", e)),
            ConfigFormat::Properties => properties::from_str(input),
        }
    }

    /// Writes a value as text in this format.
    ///
    /// JSON is pretty-printed. TOML needs an object at the top level and has
    /// no null, so those values fail with a codec error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] if the JSON or TOML writer rejects the value and
    /// [`Error::Unsupported`] if it has no properties form.
    pub fn to_string(self, value: &Value) -> Result<String> {
        match self {
            ConfigFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| Error::codec("JSON", e))
            }
            ConfigFormat::Toml => toml::to_string(value).map_err(|e| Error::codec("TOML", e)),
            ConfigFormat::Properties => properties::to_string(value),
        }
    }

    /// Reads and parses a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or any error of
    /// [`ConfigFormat::from_str`].
    pub fn load(self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        let value = self.from_str(&contents)?;
        debug!(path = %path.display(), format = %self, "loaded config");
        Ok(value)
    }

    /// Writes a value to a file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written, or any error of
    /// [`ConfigFormat::to_string`].
    pub fn save(self, path: impl AsRef<Path>, value: &Value) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_string(value)?;
        std::fs::write(path, contents)
            .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), format = %self, "saved config");
        Ok(())
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Properties => "properties",
        };
        f.write_str(name)
    }
}
