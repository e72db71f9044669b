//! Options for flattening and unflattening.
//!
//! - [`FlattenOptions`]: delimiter, depth limit, array-safe mode, key transform
//! - [`UnflattenOptions`]: delimiter, forced mappings, overwrite, key transform
//! - [`Delimiter`]: the separator joining path segments (default `.`)
//!
//! ## Examples
//!
//! ```rust
//! use serde_flat::{flatten_with_options, value, FlattenOptions};
//!
//! let data = value!({ "a": { "b": { "c": 1 } } });
//!
//! let options = FlattenOptions::new().with_delimiter("/").with_max_depth(2);
//! let flat = flatten_with_options(&data, &options);
//! assert!(flat.contains_key("a/b"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// A per-segment key rewrite applied while flattening or unflattening.
pub type KeyTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Separator placed between path segments.
///
/// An empty delimiter would make every path ambiguous, so it falls back to
/// the default `.`.
///
/// # Examples
///
/// ```rust
/// use serde_flat::Delimiter;
///
/// assert_eq!(Delimiter::default().as_str(), ".");
/// assert_eq!(Delimiter::new("::").as_str(), "::");
/// assert_eq!(Delimiter::new("").as_str(), ".");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delimiter(String);

impl Delimiter {
    pub const DEFAULT: &'static str = ".";

    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            Self::default()
        } else {
            Delimiter(delimiter)
        }
    }

    /// Returns the string representation of this delimiter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(Self::DEFAULT.to_string())
    }
}

impl From<&str> for Delimiter {
    fn from(value: &str) -> Self {
        Delimiter::new(value)
    }
}

impl From<String> for Delimiter {
    fn from(value: String) -> Self {
        Delimiter::new(value)
    }
}

impl From<char> for Delimiter {
    fn from(value: char) -> Self {
        Delimiter::new(value.to_string())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn apply_transform<'a>(transform: &Option<KeyTransform>, segment: &'a str) -> Cow<'a, str> {
    match transform {
        Some(transform) => Cow::Owned(transform(segment)),
        None => Cow::Borrowed(segment),
    }
}

/// Configuration for [`flatten_with_options`](crate::flatten_with_options).
///
/// # Examples
///
/// ```rust
/// use serde_flat::FlattenOptions;
///
/// let options = FlattenOptions::new()
///     .with_delimiter("_")
///     .with_array_safe(true)
///     .with_transform_key(|segment| segment.to_uppercase());
/// assert!(options.array_safe);
/// ```
#[derive(Clone, Default)]
pub struct FlattenOptions {
    pub delimiter: Delimiter,
    /// Deepest level that is still descended into; `None` means unlimited.
    pub max_depth: Option<NonZeroUsize>,
    /// Keep sequences as single leaves instead of indexing into them.
    pub array_safe: bool,
    pub transform_key: Option<KeyTransform>,
}

impl FlattenOptions {
    /// Creates default options: `.` delimiter, unlimited depth, arrays descended.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Limits produced keys to at most `max_depth` segments. Zero means unlimited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flat::FlattenOptions;
    ///
    /// assert_eq!(FlattenOptions::new().with_max_depth(2).max_depth.map(|d| d.get()), Some(2));
    /// assert!(FlattenOptions::new().with_max_depth(0).max_depth.is_none());
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = NonZeroUsize::new(max_depth);
        self
    }

    #[must_use]
    pub fn with_array_safe(mut self, array_safe: bool) -> Self {
        self.array_safe = array_safe;
        self
    }

    #[must_use]
    pub fn with_transform_key<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform_key = Some(Arc::new(transform));
        self
    }

    pub(crate) fn transform<'a>(&self, segment: &'a str) -> Cow<'a, str> {
        apply_transform(&self.transform_key, segment)
    }
}

impl fmt::Debug for FlattenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlattenOptions")
            .field("delimiter", &self.delimiter)
            .field("max_depth", &self.max_depth)
            .field("array_safe", &self.array_safe)
            .field("transform_key", &self.transform_key.is_some())
            .finish()
    }
}

/// Configuration for [`unflatten_with_options`](crate::unflatten_with_options).
///
/// # Examples
///
/// ```rust
/// use serde_flat::UnflattenOptions;
///
/// let options = UnflattenOptions::new().with_force_mapping(true).with_overwrite(true);
/// assert!(options.force_mapping);
/// assert!(options.overwrite);
/// ```
#[derive(Clone, Default)]
pub struct UnflattenOptions {
    pub delimiter: Delimiter,
    /// Never build sequences; numeral segments become mapping keys.
    pub force_mapping: bool,
    /// Let a nested path replace a leaf that sits where a container is needed.
    pub overwrite: bool,
    pub transform_key: Option<KeyTransform>,
}

impl UnflattenOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_force_mapping(mut self, force_mapping: bool) -> Self {
        self.force_mapping = force_mapping;
        self
    }

    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub fn with_transform_key<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform_key = Some(Arc::new(transform));
        self
    }

    pub(crate) fn transform<'a>(&self, segment: &'a str) -> Cow<'a, str> {
        apply_transform(&self.transform_key, segment)
    }

    /// The options used to re-flatten nested values found in the input.
    pub(crate) fn reflatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            delimiter: self.delimiter.clone(),
            max_depth: None,
            array_safe: false,
            transform_key: self.transform_key.clone(),
        }
    }
}

impl fmt::Debug for UnflattenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnflattenOptions")
            .field("delimiter", &self.delimiter)
            .field("force_mapping", &self.force_mapping)
            .field("overwrite", &self.overwrite)
            .field("transform_key", &self.transform_key.is_some())
            .finish()
    }
}
