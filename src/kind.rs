//! Structural classification of values.
//!
//! Every [`Value`] falls into exactly one [`Kind`]. The flattener and the
//! unflattener only ever descend into [`Kind::Sequence`] and
//! [`Kind::Mapping`]; everything else is a leaf.
//!
//! ```rust
//! use serde_flat::{classify, Kind, Value};
//!
//! assert_eq!(classify(&Value::Null), Kind::Scalar);
//! assert_eq!(classify(&Value::Array(vec![])), Kind::Sequence);
//! assert_eq!(classify(&Value::Bytes(vec![0xde, 0xad])), Kind::Opaque);
//! ```

use crate::Value;

/// The structural category of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Null, booleans, numbers and strings.
    Scalar,
    /// An ordered list.
    Sequence,
    /// A keyed collection.
    Mapping,
    /// A binary payload. Treated as a leaf even though it is sequence-like.
    Opaque,
}

impl Kind {
    /// Returns `true` for kinds the walkers may descend into.
    #[inline]
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Kind::Sequence | Kind::Mapping)
    }

    /// Returns `true` for kinds that are always leaves.
    #[inline]
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        !self.is_container()
    }
}

/// Classifies a value. Total over every input; `Null` is a scalar.
#[must_use]
pub fn classify(value: &Value) -> Kind {
    match value {
        // Checked first: a payload is never a container, whatever it holds.
        Value::Bytes(_) => Kind::Opaque,
        Value::Array(_) => Kind::Sequence,
        Value::Object(_) => Kind::Mapping,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Scalar,
    }
}
