//! Typed models for commercetools API payloads.
//!
//! Each polymorphic family is resolved through a
//! [`TypeResolver`](type_resolver::TypeResolver) built from its registry:
//! - [`FieldType`]: custom field types (`types`), discriminated by `name`
//! - [`AttributeType`]: product attribute types (`product_types`), discriminated by `name`
//! - [`MessagePayload`]: message payloads (`messages`), discriminated by `type`
//!
//! Outbound [`UpdateAction`]s serialize into the command shape the API expects.

pub mod messages;
pub mod product_types;
pub mod types;
pub mod update_actions;
pub mod value_objects;

pub use common::{LocalizedString, MappingError, ResourceId, Result};
pub use messages::{Message, MessagePayload, ProductProjection};
pub use product_types::AttributeType;
pub use types::FieldType;
pub use update_actions::{UpdateAction, UpdateRequest};
pub use value_objects::{EnumValue, LocalizedEnumValue, OrderState, Reference, ResourceIdentifier};
