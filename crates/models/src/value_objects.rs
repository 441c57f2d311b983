//! Records shared by several model families.

use std::str::FromStr;

use common::{JsonObject, LocalizedString, ResourceId, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A typed link to another resource, e.g. `{"typeId": "product", "id": "..."}`.
///
/// References are read through [`Reference::from_json`] and only serialized
/// back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// The referenced resource type (`product`, `order`, `type`…).
    pub type_id: String,

    pub id: ResourceId,
}

impl Reference {
    pub fn new(type_id: impl Into<String>, id: ResourceId) -> Self {
        Self {
            type_id: type_id.into(),
            id,
        }
    }

    /// Reads a reference from an API payload. Any expanded `obj` is ignored.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = JsonObject::new(value)?;
        Ok(Self {
            type_id: obj.required_str("typeId")?.to_string(),
            id: obj.parse_str("id")?,
        })
    }
}

/// Identifies a resource by ID or by key in request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    pub type_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ResourceIdentifier {
    /// Identifies a resource by its ID.
    pub fn by_id(type_id: impl Into<String>, id: ResourceId) -> Self {
        Self {
            type_id: type_id.into(),
            id: Some(id),
            key: None,
        }
    }

    /// Identifies a resource by its user-defined key.
    pub fn by_key(type_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: None,
            key: Some(key.into()),
        }
    }
}

/// A plain enum value: a machine key with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub key: String,
    pub label: String,
}

impl EnumValue {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = JsonObject::new(value)?;
        Ok(Self {
            key: obj.required_str("key")?.to_string(),
            label: obj.required_str("label")?.to_string(),
        })
    }
}

/// An enum value whose label is localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedEnumValue {
    pub key: String,
    pub label: LocalizedString,
}

impl LocalizedEnumValue {
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = JsonObject::new(value)?;
        Ok(Self {
            key: obj.required_str("key")?.to_string(),
            label: LocalizedString::from_json(Some(obj.required("label")?))?,
        })
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderState {
    Open,
    Confirmed,
    Complete,
    Cancelled,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Open => "Open",
            OrderState::Confirmed => "Confirmed",
            OrderState::Complete => "Complete",
            OrderState::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name an [`OrderState`].
#[derive(Debug, Error)]
#[error("unknown order state: {0}")]
pub struct ParseOrderStateError(String);

impl FromStr for OrderState {
    type Err = ParseOrderStateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Open" => Ok(OrderState::Open),
            "Confirmed" => Ok(OrderState::Confirmed),
            "Complete" => Ok(OrderState::Complete),
            "Cancelled" => Ok(OrderState::Cancelled),
            other => Err(ParseOrderStateError(other.to_string())),
        }
    }
}
