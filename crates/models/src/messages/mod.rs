//! Messages: change notifications recorded by the platform for each resource.

mod payload;
mod product_projection;

use chrono::{DateTime, Utc};
use common::{JsonObject, ResourceId, Result};
use serde_json::Value;
use type_resolver::{TypeResolver, Variant};

pub use payload::MessagePayload;
pub use product_projection::ProductProjection;

use crate::value_objects::Reference;

/// A message with its common envelope fields and type-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: ResourceId,
    pub version: i64,

    /// Position of this message among all messages of the same resource.
    pub sequence_number: i64,

    /// The resource the message is about.
    pub resource: Reference,

    /// The resource's version after the change.
    pub resource_version: i64,

    pub created_at: DateTime<Utc>,
    pub last_modified_at: Option<DateTime<Utc>>,
    pub payload: MessagePayload,
}

impl Message {
    /// Reads a message using the shared payload resolver.
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::resolve_with(MessagePayload::shared_resolver(), value)
    }

    /// Reads a message, resolving its payload with the given resolver.
    #[tracing::instrument(skip_all)]
    pub fn resolve_with(resolver: &TypeResolver<MessagePayload>, value: &Value) -> Result<Self> {
        let obj = JsonObject::new(value)?;
        let payload = resolver.resolve_object(&obj)?;

        let message = Self {
            id: obj.parse_str("id")?,
            version: obj.required_i64("version")?,
            sequence_number: obj.required_i64("sequenceNumber")?,
            resource: Reference::from_json(obj.required("resource")?)?,
            resource_version: obj.required_i64("resourceVersion")?,
            created_at: obj.parse_str("createdAt")?,
            last_modified_at: obj.optional_parse_str("lastModifiedAt")?,
            payload,
        };
        tracing::debug!(
            message_type = message.message_type(),
            resource = %message.resource.id,
            "message mapped"
        );
        Ok(message)
    }

    /// Reads the `results` of a message query.
    pub fn list_from_json(page: &Value) -> Result<Vec<Self>> {
        let obj = JsonObject::new(page)?;
        obj.map_array("results", Self::from_json)
    }

    /// Returns the message type, e.g. `"ProductCreated"`.
    pub fn message_type(&self) -> &str {
        self.payload.discriminator()
    }
}
