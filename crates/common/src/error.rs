//! Mapping error types.

use serde_json::Value;
use thiserror::Error;

/// The shape of a JSON value, used to report mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the kind of the given value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl std::fmt::Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ways in which a JSON value can fail to match the shape a model expects.
#[derive(Debug, Error)]
pub enum MalformedInput {
    /// The value is not a JSON object.
    #[error("expected an object, found {found}")]
    NotAnObject { found: JsonKind },

    /// A field declared mandatory is absent (or `null`).
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    /// A field holds a value of the wrong kind.
    #[error("field `{field}` expected {expected}, found {found}")]
    WrongKind {
        field: String,
        expected: JsonKind,
        found: JsonKind,
    },

    /// A field has the right kind but an unusable value.
    #[error("field `{field}` is invalid: {reason}")]
    InvalidValue { field: String, reason: String },

    /// An element of an array field could not be mapped.
    #[error("element {index} of `{field}`: {source}")]
    Element {
        field: String,
        index: usize,
        source: Box<MappingError>,
    },

    /// A variant factory failed while copying its fields.
    #[error("cannot build {family} variant `{discriminator}`: {source}")]
    Variant {
        family: String,
        discriminator: String,
        source: Box<MappingError>,
    },
}

/// Errors raised while mapping JSON payloads into typed models.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The payload's shape does not match the expected structure.
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    /// A polymorphic payload lacks its discriminator field.
    #[error("Missing discriminator `{field}` in {family} payload")]
    MissingDiscriminator { family: String, field: String },

    /// The discriminator value has no registered factory.
    #[error("Unknown {family} variant: {discriminator}")]
    UnknownVariant {
        family: String,
        discriminator: String,
    },
}

impl MappingError {
    /// Shorthand for a [`MalformedInput::MissingField`] error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        MalformedInput::MissingField {
            field: field.into(),
        }
        .into()
    }

    /// Shorthand for a [`MalformedInput::WrongKind`] error.
    pub fn wrong_kind(field: impl Into<String>, expected: JsonKind, found: &Value) -> Self {
        MalformedInput::WrongKind {
            field: field.into(),
            expected,
            found: JsonKind::of(found),
        }
        .into()
    }

    /// Shorthand for a [`MalformedInput::InvalidValue`] error.
    pub fn invalid_value(field: impl Into<String>, reason: impl ToString) -> Self {
        MalformedInput::InvalidValue {
            field: field.into(),
            reason: reason.to_string(),
        }
        .into()
    }

    /// Returns true if this is a [`MappingError::MalformedInput`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, MappingError::MalformedInput(_))
    }
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
