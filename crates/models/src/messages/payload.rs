//! Message payload variants.

use std::sync::LazyLock;

use common::{JsonKind, JsonObject, MappingError, ResourceId, Result};
use type_resolver::{ResolverConfig, TypeResolver, Variant, VariantRegistry};

use super::ProductProjection;
use crate::value_objects::OrderState;

/// What happened, as described by a message's `type` and its specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePayload {
    /// A product was created.
    ProductCreated { product_projection: ProductProjection },

    /// A product's staged data was published.
    ProductPublished {
        product_projection: ProductProjection,
        removed_image_urls: Vec<String>,
    },

    /// A product was deleted.
    ProductDeleted { removed_image_urls: Vec<String> },

    /// An order was created.
    OrderCreated {
        order_id: ResourceId,
        order_number: Option<String>,
    },

    /// An order moved to another state.
    OrderStateChanged {
        order_state: OrderState,
        old_order_state: Option<OrderState>,
    },

    /// A customer signed up or was created.
    CustomerCreated {
        customer_id: ResourceId,
        email: String,
    },
}

impl Variant for MessagePayload {
    fn discriminator(&self) -> &str {
        match self {
            MessagePayload::ProductCreated { .. } => "ProductCreated",
            MessagePayload::ProductPublished { .. } => "ProductPublished",
            MessagePayload::ProductDeleted { .. } => "ProductDeleted",
            MessagePayload::OrderCreated { .. } => "OrderCreated",
            MessagePayload::OrderStateChanged { .. } => "OrderStateChanged",
            MessagePayload::CustomerCreated { .. } => "CustomerCreated",
        }
    }
}

static SHARED: LazyLock<TypeResolver<MessagePayload>> = LazyLock::new(MessagePayload::resolver);

fn string_list(obj: &JsonObject<'_>, field: &str) -> Result<Vec<String>> {
    obj.map_array(field, |item| {
        item.as_str()
            .map(str::to_string)
            .ok_or_else(|| MappingError::wrong_kind(field, JsonKind::String, item))
    })
}

impl MessagePayload {
    pub fn config() -> ResolverConfig {
        ResolverConfig::new("Message").discriminator_field("type")
    }

    /// Builds a registry holding every known message type.
    pub fn registry() -> VariantRegistry<MessagePayload> {
        VariantRegistry::new()
            .with("ProductCreated", |obj| {
                Ok(MessagePayload::ProductCreated {
                    product_projection: ProductProjection::from_json(
                        obj.required("productProjection")?,
                    )?,
                })
            })
            .with("ProductPublished", |obj| {
                Ok(MessagePayload::ProductPublished {
                    product_projection: ProductProjection::from_json(
                        obj.required("productProjection")?,
                    )?,
                    removed_image_urls: string_list(obj, "removedImageUrls")?,
                })
            })
            .with("ProductDeleted", |obj| {
                Ok(MessagePayload::ProductDeleted {
                    removed_image_urls: string_list(obj, "removedImageUrls")?,
                })
            })
            .with("OrderCreated", |obj| {
                let order = obj.required_object("order")?;
                Ok(MessagePayload::OrderCreated {
                    order_id: order.parse_str("id")?,
                    order_number: order.optional_str("orderNumber")?.map(str::to_string),
                })
            })
            .with("OrderStateChanged", |obj| {
                Ok(MessagePayload::OrderStateChanged {
                    order_state: obj.parse_str("orderState")?,
                    old_order_state: obj.optional_parse_str("oldOrderState")?,
                })
            })
            .with("CustomerCreated", |obj| {
                let customer = obj.required_object("customer")?;
                Ok(MessagePayload::CustomerCreated {
                    customer_id: customer.parse_str("id")?,
                    email: customer.required_str("email")?.to_string(),
                })
            })
    }

    pub fn resolver() -> TypeResolver<MessagePayload> {
        TypeResolver::new(Self::config(), Self::registry())
    }

    pub fn shared_resolver() -> &'static TypeResolver<MessagePayload> {
        &SHARED
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn order_state_changed() {
        let payload = MessagePayload::resolver()
            .resolve(&json!({
                "type": "OrderStateChanged",
                "orderState": "Complete",
                "oldOrderState": "Confirmed"
            }))
            .unwrap();

        assert_eq!(
            payload,
            MessagePayload::OrderStateChanged {
                order_state: OrderState::Complete,
                old_order_state: Some(OrderState::Confirmed),
            }
        );
    }

    #[test]
    fn unknown_order_state_is_malformed() {
        let err = MessagePayload::resolver()
            .resolve(&json!({"type": "OrderStateChanged", "orderState": "Shipped"}))
            .unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("OrderStateChanged"));
    }

    #[test]
    fn product_deleted_without_images() {
        let payload = MessagePayload::resolver()
            .resolve(&json!({"type": "ProductDeleted"}))
            .unwrap();
        assert_eq!(
            payload,
            MessagePayload::ProductDeleted {
                removed_image_urls: Vec::new()
            }
        );
    }

    #[test]
    fn customer_created_reads_nested_customer() {
        let id = ResourceId::new();
        let payload = MessagePayload::resolver()
            .resolve(&json!({
                "type": "CustomerCreated",
                "customer": {"id": id.to_string(), "email": "jane@example.com", "version": 1}
            }))
            .unwrap();
        assert_eq!(
            payload,
            MessagePayload::CustomerCreated {
                customer_id: id,
                email: "jane@example.com".to_string()
            }
        );
    }

    #[test]
    fn unregistered_message_type_fails() {
        let err = MessagePayload::resolver()
            .resolve(&json!({"type": "ReviewCreated"}))
            .unwrap_err();
        assert!(matches!(err, MappingError::UnknownVariant { .. }));
    }
}
