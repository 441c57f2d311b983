//! Product attribute types.

use std::sync::LazyLock;

use common::{JsonObject, Result};
use serde_json::Value;
use type_resolver::{NestedResolver, ResolverConfig, TypeResolver, Variant, VariantRegistry};

use crate::value_objects::{EnumValue, LocalizedEnumValue, Reference};

/// The type of a product attribute, as declared by a product type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    Boolean,
    Text,
    LocalizedText,
    Enum { values: Vec<EnumValue> },
    LocalizedEnum { values: Vec<LocalizedEnumValue> },
    Number,
    Money,
    Date,
    Time,
    DateTime,
    Reference { reference_type_id: String },
    Set { element_type: Box<AttributeType> },

    /// Attributes of another product type, embedded as a nested record.
    Nested { type_reference: Reference },
}

impl Variant for AttributeType {
    fn discriminator(&self) -> &str {
        match self {
            AttributeType::Boolean => "boolean",
            AttributeType::Text => "text",
            AttributeType::LocalizedText => "ltext",
            AttributeType::Enum { .. } => "enum",
            AttributeType::LocalizedEnum { .. } => "lenum",
            AttributeType::Number => "number",
            AttributeType::Money => "money",
            AttributeType::Date => "date",
            AttributeType::Time => "time",
            AttributeType::DateTime => "datetime",
            AttributeType::Reference { .. } => "reference",
            AttributeType::Set { .. } => "set",
            AttributeType::Nested { .. } => "nested",
        }
    }
}

static SHARED: LazyLock<TypeResolver<AttributeType>> = LazyLock::new(AttributeType::resolver);

impl AttributeType {
    pub fn config() -> ResolverConfig {
        ResolverConfig::new("AttributeType").discriminator_field("name")
    }

    /// Builds a registry holding every known attribute type.
    pub fn registry() -> VariantRegistry<AttributeType> {
        VariantRegistry::new()
            .with("boolean", |_| Ok(AttributeType::Boolean))
            .with("text", |_| Ok(AttributeType::Text))
            .with("ltext", |_| Ok(AttributeType::LocalizedText))
            .with("enum", |obj| {
                Ok(AttributeType::Enum {
                    values: obj.map_array("values", EnumValue::from_json)?,
                })
            })
            .with("lenum", |obj| {
                Ok(AttributeType::LocalizedEnum {
                    values: obj.map_array("values", LocalizedEnumValue::from_json)?,
                })
            })
            .with("number", |_| Ok(AttributeType::Number))
            .with("money", |_| Ok(AttributeType::Money))
            .with("date", |_| Ok(AttributeType::Date))
            .with("time", |_| Ok(AttributeType::Time))
            .with("datetime", |_| Ok(AttributeType::DateTime))
            .with("reference", |obj| {
                Ok(AttributeType::Reference {
                    reference_type_id: obj.required_str("referenceTypeId")?.to_string(),
                })
            })
            .with_nested("set", AttributeType::set_from_json)
            .with("nested", |obj| {
                Ok(AttributeType::Nested {
                    type_reference: Reference::from_json(obj.required("typeReference")?)?,
                })
            })
    }

    pub fn resolver() -> TypeResolver<AttributeType> {
        TypeResolver::new(Self::config(), Self::registry())
    }

    pub fn shared_resolver() -> &'static TypeResolver<AttributeType> {
        &SHARED
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        SHARED.resolve(value)
    }

    fn set_from_json(obj: &JsonObject<'_>, nested: &NestedResolver<'_, AttributeType>) -> Result<Self> {
        Ok(AttributeType::Set {
            element_type: Box::new(nested.resolve_field(obj, "elementType")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use common::{MappingError, ResourceId};
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_plain_enum() {
        let attribute_type = AttributeType::from_json(&json!({
            "name": "enum",
            "values": [{"key": "S", "label": "Small"}, {"key": "M", "label": "Medium"}]
        }))
        .unwrap();

        let AttributeType::Enum { values } = attribute_type else {
            panic!("expected enum attribute type");
        };
        assert_eq!(values[0], EnumValue::new("S", "Small"));
        assert_eq!(values[1].key, "M");
    }

    #[test]
    fn resolves_localized_enum() {
        let attribute_type = AttributeType::from_json(&json!({
            "name": "lenum",
            "values": [{"key": "red", "label": {"en": "Red", "de": "Rot"}}]
        }))
        .unwrap();

        let AttributeType::LocalizedEnum { values } = attribute_type else {
            panic!("expected localized enum attribute type");
        };
        assert_eq!(values[0].label.get_value("de"), "Rot");
    }

    #[test]
    fn resolves_nested_type_reference() {
        let id = ResourceId::new();
        let attribute_type = AttributeType::from_json(&json!({
            "name": "nested",
            "typeReference": {"typeId": "product-type", "id": id.to_string()}
        }))
        .unwrap();

        assert_eq!(
            attribute_type,
            AttributeType::Nested {
                type_reference: Reference::new("product-type", id)
            }
        );
    }

    #[test]
    fn set_of_sets() {
        let attribute_type = AttributeType::from_json(&json!({
            "name": "set",
            "elementType": {"name": "set", "elementType": {"name": "money"}}
        }))
        .unwrap();

        assert_eq!(
            attribute_type,
            AttributeType::Set {
                element_type: Box::new(AttributeType::Set {
                    element_type: Box::new(AttributeType::Money)
                })
            }
        );
    }

    #[test]
    fn field_type_names_are_not_attribute_types() {
        let err = AttributeType::from_json(&json!({"name": "LocalizedString"})).unwrap_err();
        assert!(matches!(err, MappingError::UnknownVariant { .. }));
    }

    #[test]
    fn set_elements_follow_registry_overrides() {
        let registry = AttributeType::registry().with("text", |_| Ok(AttributeType::LocalizedText));
        let resolver = TypeResolver::new(AttributeType::config(), registry);

        let set = resolver
            .resolve(&json!({"name": "set", "elementType": {"name": "text"}}))
            .unwrap();
        assert_eq!(
            set,
            AttributeType::Set {
                element_type: Box::new(AttributeType::LocalizedText)
            }
        );
    }
}
