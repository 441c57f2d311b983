use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the platform to every resource (product, order, type, message…).
///
/// IDs arrive as hyphenated UUID strings and are parsed once while mapping,
/// so a malformed ID surfaces as a mapping error instead of travelling on as
/// an opaque string next to keys and SKUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(Uuid);

impl ResourceId {
    /// Creates a random ID, for drafts and fixtures.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0.as_hyphenated(), f)
    }
}

impl FromStr for ResourceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "3c8dd9ba-3d2f-4a3e-9b7b-2b9f6b3f4a11";

    #[test]
    fn fixtures_get_distinct_ids() {
        assert_ne!(ResourceId::new(), ResourceId::new());
    }

    #[test]
    fn parses_api_ids() {
        let id: ResourceId = ID.parse().unwrap();
        assert_eq!(id.to_string(), ID);
        assert!("not-a-uuid".parse::<ResourceId>().is_err());
        assert!("".parse::<ResourceId>().is_err());
    }

    #[test]
    fn uppercase_ids_print_lowercase() {
        let id: ResourceId = ID.to_uppercase().parse().unwrap();
        assert_eq!(id.to_string(), ID);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: ResourceId = ID.parse().unwrap();
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(ID));
        let back: ResourceId = serde_json::from_value(serde_json::json!(ID)).unwrap();
        assert_eq!(back, id);
    }
}
