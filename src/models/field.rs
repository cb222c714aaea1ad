//! Presence-aware optional fields and outbound serialization policies.
//!
//! The SmartHR API treats an omitted attribute differently from one sent as
//! `null`, so optional request fields track whether the caller supplied them
//! at all. [`Field`] keeps that distinction through decoding:
//!
//! - key absent in the input -> [`Field::Unset`]
//! - key present with `null` -> [`Field::Null`]
//! - key present with a value -> [`Field::Value`]
//!
//! Request bodies are produced by [`SerializationPolicy::render`], which either
//! drops every unset or null field or writes every declared field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An optional request field that remembers whether it was supplied.
///
/// Model structs declare these with `#[serde(default)]` so a missing key
/// decodes to `Unset`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Not supplied by the caller
    #[default]
    Unset,
    /// Explicitly supplied as null
    Null,
    /// Supplied with a value
    Value(T),
}

impl<T> Field<T> {
    /// Wrap an `Option`, treating `None` as "not supplied".
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Unset,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Supplied with a non-null value
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Replace an unset field with `value`; null and supplied values are kept.
    pub fn or_default_value(self, value: T) -> Self {
        match self {
            Self::Unset => Self::Value(value),
            other => other,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absence goes through Default.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}

/// How a request model is turned into a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationPolicy {
    /// Emit only fields the caller supplied with a non-null value.
    /// Used for create and PATCH requests.
    OmitUnsetAndNull,
    /// Emit every declared field, writing absent ones as `null`.
    /// Used for PUT full-replace requests.
    IncludeAll,
}

impl SerializationPolicy {
    /// Serialize `model` according to this policy.
    pub fn render<T: Serialize>(self, model: &T) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(model)?;
        if self == Self::OmitUnsetAndNull {
            strip_nulls(&mut value);
        }
        Ok(value)
    }
}

/// Remove null members from every object, recursively.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
