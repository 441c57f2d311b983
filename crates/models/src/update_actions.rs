//! Update actions sent to the API to modify existing resources.

use common::LocalizedString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use type_resolver::Variant;

use crate::value_objects::{OrderState, ResourceIdentifier};

/// A single change requested on a resource, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum UpdateAction {
    /// Sets, overwrites or (without a value) removes a custom field.
    SetCustomField {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    /// Sets or (without a type) removes the custom type and its fields.
    SetCustomType {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        custom_type: Option<ResourceIdentifier>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fields: Option<Map<String, Value>>,
    },

    ChangeName { name: LocalizedString },

    SetDescription {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<LocalizedString>,
    },

    #[serde(rename_all = "camelCase")]
    ChangeOrderState { order_state: OrderState },
}

impl Variant for UpdateAction {
    fn discriminator(&self) -> &str {
        match self {
            UpdateAction::SetCustomField { .. } => "setCustomField",
            UpdateAction::SetCustomType { .. } => "setCustomType",
            UpdateAction::ChangeName { .. } => "changeName",
            UpdateAction::SetDescription { .. } => "setDescription",
            UpdateAction::ChangeOrderState { .. } => "changeOrderState",
        }
    }
}

// Convenience constructors
impl UpdateAction {
    pub fn set_custom_field(name: impl Into<String>, value: impl Into<Value>) -> Self {
        UpdateAction::SetCustomField {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn remove_custom_field(name: impl Into<String>) -> Self {
        UpdateAction::SetCustomField {
            name: name.into(),
            value: None,
        }
    }

    pub fn set_custom_type(custom_type: ResourceIdentifier, fields: Map<String, Value>) -> Self {
        UpdateAction::SetCustomType {
            custom_type: Some(custom_type),
            fields: Some(fields),
        }
    }

    pub fn remove_custom_type() -> Self {
        UpdateAction::SetCustomType {
            custom_type: None,
            fields: None,
        }
    }

    pub fn change_name(name: LocalizedString) -> Self {
        UpdateAction::ChangeName { name }
    }

    pub fn set_description(description: Option<LocalizedString>) -> Self {
        UpdateAction::SetDescription { description }
    }

    pub fn change_order_state(order_state: OrderState) -> Self {
        UpdateAction::ChangeOrderState { order_state }
    }

    /// Returns the action name sent on the wire.
    pub fn action(&self) -> &str {
        self.discriminator()
    }
}

/// Body of an update request: the expected resource version and its actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub version: i64,
    pub actions: Vec<UpdateAction>,
}

impl UpdateRequest {
    pub fn new(version: i64) -> Self {
        Self {
            version,
            actions: Vec::new(),
        }
    }

    /// Appends an action.
    pub fn action(mut self, action: UpdateAction) -> Self {
        self.actions.push(action);
        self
    }
}
