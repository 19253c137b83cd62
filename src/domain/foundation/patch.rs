//! Tri-state field wrapper for partial updates.

use serde::{Deserialize, Deserializer};

/// A field in a partial update.
///
/// JSON `{}` yields `Unset`, `{"field": null}` yields `Null`, and
/// `{"field": 1.5}` yields `Value(1.5)`. Struct fields using this type must
/// carry `#[serde(default)]` so an omitted key falls back to `Unset`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    /// Field omitted: keep the stored value.
    #[default]
    Unset,
    /// Field explicitly set to null.
    Null,
    /// Field set to a value.
    Value(T),
}

impl<T> Patch<T> {
    /// True when the field was omitted.
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Applies the patch to a nullable stored value.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Unset => current,
            Patch::Null => None,
            Patch::Value(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
