//! Custom field types.
//!
//! A type definition declares the custom fields a resource may carry; each
//! field's type arrives as `{"name": "<kind>", ...}`.

use std::sync::LazyLock;

use common::{JsonObject, Result};
use serde_json::Value;
use type_resolver::{NestedResolver, ResolverConfig, TypeResolver, Variant, VariantRegistry};

use crate::value_objects::{EnumValue, LocalizedEnumValue};

/// The type of a custom field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Boolean,
    String,
    LocalizedString,

    /// A choice among plain enum values, in declaration order.
    Enum { values: Vec<EnumValue> },

    /// A choice among enum values with localized labels.
    LocalizedEnum { values: Vec<LocalizedEnumValue> },

    Number,
    Money,
    Date,
    Time,
    DateTime,

    /// A reference to a resource of the given type (`product`, `category`…).
    Reference { reference_type_id: String },

    /// A set of values of the element type.
    Set { element_type: Box<FieldType> },
}

impl Variant for FieldType {
    fn discriminator(&self) -> &str {
        match self {
            FieldType::Boolean => "Boolean",
            FieldType::String => "String",
            FieldType::LocalizedString => "LocalizedString",
            FieldType::Enum { .. } => "Enum",
            FieldType::LocalizedEnum { .. } => "LocalizedEnum",
            FieldType::Number => "Number",
            FieldType::Money => "Money",
            FieldType::Date => "Date",
            FieldType::Time => "Time",
            FieldType::DateTime => "DateTime",
            FieldType::Reference { .. } => "Reference",
            FieldType::Set { .. } => "Set",
        }
    }
}

static SHARED: LazyLock<TypeResolver<FieldType>> = LazyLock::new(FieldType::resolver);

impl FieldType {
    /// Returns the resolver configuration for field types.
    pub fn config() -> ResolverConfig {
        ResolverConfig::new("FieldType").discriminator_field("name")
    }

    /// Builds a registry holding every known field type.
    pub fn registry() -> VariantRegistry<FieldType> {
        VariantRegistry::new()
            .with("Boolean", |_| Ok(FieldType::Boolean))
            .with("String", |_| Ok(FieldType::String))
            .with("LocalizedString", |_| Ok(FieldType::LocalizedString))
            .with("Enum", |obj| {
                Ok(FieldType::Enum {
                    values: obj.map_array("values", EnumValue::from_json)?,
                })
            })
            .with("LocalizedEnum", |obj| {
                Ok(FieldType::LocalizedEnum {
                    values: obj.map_array("values", LocalizedEnumValue::from_json)?,
                })
            })
            .with("Number", |_| Ok(FieldType::Number))
            .with("Money", |_| Ok(FieldType::Money))
            .with("Date", |_| Ok(FieldType::Date))
            .with("Time", |_| Ok(FieldType::Time))
            .with("DateTime", |_| Ok(FieldType::DateTime))
            .with("Reference", |obj| {
                Ok(FieldType::Reference {
                    reference_type_id: obj.required_str("referenceTypeId")?.to_string(),
                })
            })
            .with_nested("Set", FieldType::set_from_json)
    }

    /// Builds a fresh resolver over [`registry`](Self::registry).
    pub fn resolver() -> TypeResolver<FieldType> {
        TypeResolver::new(Self::config(), Self::registry())
    }

    /// Returns the process-wide resolver, built on first use.
    pub fn shared_resolver() -> &'static TypeResolver<FieldType> {
        &SHARED
    }

    /// Resolves a field type payload with the shared resolver.
    pub fn from_json(value: &Value) -> Result<Self> {
        SHARED.resolve(value)
    }

    fn set_from_json(obj: &JsonObject<'_>, nested: &NestedResolver<'_, FieldType>) -> Result<Self> {
        Ok(FieldType::Set {
            element_type: Box::new(nested.resolve_field(obj, "elementType")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use common::{MalformedInput, MappingError};
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_enum_values_in_order() {
        let field_type = FieldType::from_json(&json!({
            "name": "Enum",
            "values": [{"key": "b", "label": "Bee"}, {"key": "a", "label": "Ay"}]
        }))
        .unwrap();

        assert_eq!(
            field_type,
            FieldType::Enum {
                values: vec![EnumValue::new("b", "Bee"), EnumValue::new("a", "Ay")]
            }
        );
    }

    #[test]
    fn enum_without_values_is_empty() {
        let field_type = FieldType::from_json(&json!({"name": "Enum"})).unwrap();
        assert_eq!(field_type, FieldType::Enum { values: Vec::new() });
    }

    #[test]
    fn money_ignores_other_fields() {
        let field_type =
            FieldType::from_json(&json!({"name": "Money", "values": "ignored"})).unwrap();
        assert_eq!(field_type, FieldType::Money);
    }

    #[test]
    fn reference_requires_type_id() {
        let err = FieldType::from_json(&json!({"name": "Reference"})).unwrap_err();
        assert!(matches!(
            err,
            MappingError::MalformedInput(MalformedInput::Variant { ref discriminator, .. })
                if discriminator == "Reference"
        ));
    }

    #[test]
    fn set_resolves_its_element_type() {
        let field_type = FieldType::from_json(&json!({
            "name": "Set",
            "elementType": {"name": "Reference", "referenceTypeId": "category"}
        }))
        .unwrap();

        let FieldType::Set { element_type } = field_type else {
            panic!("expected set type");
        };
        assert_eq!(
            *element_type,
            FieldType::Reference {
                reference_type_id: "category".to_string()
            }
        );
    }

    #[test]
    fn set_with_unknown_element_type_fails() {
        let err = FieldType::from_json(&json!({
            "name": "Set",
            "elementType": {"name": "Hologram"}
        }))
        .unwrap_err();

        let MappingError::MalformedInput(MalformedInput::Variant { source, .. }) = err else {
            panic!("expected wrapped error");
        };
        assert!(matches!(*source, MappingError::UnknownVariant { .. }));
    }

    #[test]
    fn type_discriminator_is_not_used() {
        let err = FieldType::from_json(&json!({"type": "Money"})).unwrap_err();
        assert!(matches!(err, MappingError::MissingDiscriminator { .. }));
    }

    #[test]
    fn every_variant_round_trips_its_discriminator() {
        let resolver = FieldType::resolver();
        for discriminator in resolver.discriminators() {
            let payload = match discriminator {
                "Reference" => json!({"name": discriminator, "referenceTypeId": "product"}),
                "Set" => json!({"name": discriminator, "elementType": {"name": "String"}}),
                _ => json!({"name": discriminator}),
            };
            let field_type = resolver.resolve(&payload).unwrap();
            assert_eq!(field_type.discriminator(), discriminator);
        }
    }

    #[test]
    fn set_elements_follow_registry_overrides() {
        let registry = FieldType::registry().with("Reference", |_| Ok(FieldType::Money));
        let resolver = TypeResolver::new(FieldType::config(), registry);

        let top = resolver
            .resolve(&json!({"name": "Reference", "referenceTypeId": "x"}))
            .unwrap();
        let set = resolver
            .resolve(&json!({
                "name": "Set",
                "elementType": {"name": "Reference", "referenceTypeId": "x"}
            }))
            .unwrap();

        assert_eq!(top, FieldType::Money);
        assert_eq!(
            set,
            FieldType::Set {
                element_type: Box::new(FieldType::Money)
            }
        );
    }
}
