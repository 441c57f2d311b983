//! Product projections embedded in product messages.

use common::{JsonObject, LocalizedString, ResourceId, Result};
use serde_json::Value;

use crate::value_objects::Reference;

/// The current or staged view of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductProjection {
    pub id: ResourceId,
    pub version: i64,
    pub key: Option<String>,
    pub product_type: Reference,
    pub name: LocalizedString,
    pub slug: LocalizedString,

    /// Empty when the product has no description.
    pub description: LocalizedString,

    pub published: bool,
}

impl ProductProjection {
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = JsonObject::new(value)?;
        Ok(Self {
            id: obj.parse_str("id")?,
            version: obj.required_i64("version")?,
            key: obj.optional_str("key")?.map(str::to_string),
            product_type: Reference::from_json(obj.required("productType")?)?,
            name: LocalizedString::from_json(Some(obj.required("name")?))?,
            slug: LocalizedString::from_json(Some(obj.required("slug")?))?,
            description: LocalizedString::from_json(obj.get("description"))?,
            published: obj.optional_bool("published")?.unwrap_or(false),
        })
    }
}
