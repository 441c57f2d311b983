//! Typed accessors over parsed JSON objects.
//!
//! Model constructors read their fields through [`JsonObject`] instead of
//! indexing into [`serde_json::Value`] directly, so every shape mismatch turns
//! into a [`MappingError`] naming the offending field. A field holding JSON
//! `null` is treated the same as an absent field.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{JsonKind, MalformedInput, MappingError, Result};

/// A borrowed view of a JSON object with typed field accessors.
#[derive(Debug, Clone, Copy)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> JsonObject<'a> {
    /// Wraps a value, failing if it is not a JSON object.
    pub fn new(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(MalformedInput::NotAnObject {
                found: JsonKind::of(other),
            }
            .into()),
        }
    }

    /// Wraps an already-extracted map.
    pub fn from_map(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// Iterates over the entries in source order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the field's value, or `None` if it is absent or `null`.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    /// Returns true if the field is present and not `null`.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Returns the field's value, failing if it is absent.
    pub fn required(&self, field: &str) -> Result<&'a Value> {
        self.get(field)
            .ok_or_else(|| MappingError::missing_field(field))
    }

    pub fn required_str(&self, field: &str) -> Result<&'a str> {
        let value = self.required(field)?;
        value
            .as_str()
            .ok_or_else(|| MappingError::wrong_kind(field, JsonKind::String, value))
    }

    pub fn optional_str(&self, field: &str) -> Result<Option<&'a str>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(MappingError::wrong_kind(field, JsonKind::String, other)),
        }
    }

    pub fn required_bool(&self, field: &str) -> Result<bool> {
        let value = self.required(field)?;
        value
            .as_bool()
            .ok_or_else(|| MappingError::wrong_kind(field, JsonKind::Bool, value))
    }

    pub fn optional_bool(&self, field: &str) -> Result<Option<bool>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(MappingError::wrong_kind(field, JsonKind::Bool, other)),
        }
    }

    /// Reads an integral number. Fractional numbers are rejected.
    pub fn required_i64(&self, field: &str) -> Result<i64> {
        let value = self.required(field)?;
        Self::integer(field, value)
    }

    pub fn optional_i64(&self, field: &str) -> Result<Option<i64>> {
        self.get(field)
            .map(|value| Self::integer(field, value))
            .transpose()
    }

    fn integer(field: &str, value: &Value) -> Result<i64> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| MappingError::invalid_value(field, format!("{n} is not an integer"))),
            other => Err(MappingError::wrong_kind(field, JsonKind::Number, other)),
        }
    }

    pub fn required_object(&self, field: &str) -> Result<JsonObject<'a>> {
        let value = self.required(field)?;
        Self::object(field, value)
    }

    pub fn optional_object(&self, field: &str) -> Result<Option<JsonObject<'a>>> {
        self.get(field)
            .map(|value| Self::object(field, value))
            .transpose()
    }

    fn object(field: &str, value: &'a Value) -> Result<JsonObject<'a>> {
        match value {
            Value::Object(map) => Ok(JsonObject { map }),
            other => Err(MappingError::wrong_kind(field, JsonKind::Object, other)),
        }
    }

    pub fn required_array(&self, field: &str) -> Result<&'a [Value]> {
        let value = self.required(field)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| MappingError::wrong_kind(field, JsonKind::Array, value))
    }

    /// Reads an array field, yielding an empty slice when it is absent.
    pub fn optional_array(&self, field: &str) -> Result<&'a [Value]> {
        match self.get(field) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(MappingError::wrong_kind(field, JsonKind::Array, other)),
        }
    }

    /// Maps every element of an array field, preserving order.
    ///
    /// An absent field yields an empty vector. A failing element is reported
    /// as [`MalformedInput::Element`] carrying its index.
    pub fn map_array<T, F>(&self, field: &str, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&'a Value) -> Result<T>,
    {
        self.optional_array(field)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                f(item).map_err(|source| {
                    MappingError::from(MalformedInput::Element {
                        field: field.to_string(),
                        index,
                        source: Box::new(source),
                    })
                })
            })
            .collect()
    }

    /// Parses a string field with [`FromStr`].
    pub fn parse_str<T>(&self, field: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.required_str(field)?;
        raw.parse()
            .map_err(|e| MappingError::invalid_value(field, e))
    }

    pub fn optional_parse_str<T>(&self, field: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional_str(field)?
            .map(|raw| raw.parse().map_err(|e| MappingError::invalid_value(field, e)))
            .transpose()
    }
}

impl<'a> TryFrom<&'a Value> for JsonObject<'a> {
    type Error = MappingError;

    fn try_from(value: &'a Value) -> Result<Self> {
        JsonObject::new(value)
    }
}
