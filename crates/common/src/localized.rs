//! Localized strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{JsonKind, MappingError, Result};
use crate::json::JsonObject;

/// The same display text in several languages, keyed by IETF language tag.
///
/// On the wire a localized string is a JSON object such as
/// `{"en": "Shirt", "de": "Hemd"}`. Each language tag holds at most one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString {
    values: BTreeMap<String, String>,
}

impl LocalizedString {
    /// Creates an empty localized string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a localized string from an API payload fragment.
    ///
    /// An absent or `null` source yields an empty value. String entries are
    /// copied verbatim; numbers and booleans are stored as their JSON text and
    /// a `null` entry as an empty string. Objects and arrays are malformed.
    pub fn from_json(source: Option<&Value>) -> Result<Self> {
        let Some(source) = source.filter(|v| !v.is_null()) else {
            return Ok(Self::new());
        };

        let object = JsonObject::new(source)?;
        let mut localized = Self::new();
        for (language, value) in object.entries() {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                other => return Err(MappingError::wrong_kind(language, JsonKind::String, other)),
            };
            localized.set_value(language, text);
        }
        Ok(localized)
    }

    /// Sets the value for a language, overwriting any previous value.
    pub fn set_value(&mut self, language: impl Into<String>, value: impl Into<String>) {
        self.values.insert(language.into(), value.into());
    }

    /// Builder-style variant of [`set_value`](Self::set_value).
    pub fn with_value(mut self, language: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_value(language, value);
        self
    }

    /// Returns the value for a language, or an empty string if none is set.
    pub fn get_value(&self, language: &str) -> String {
        self.values.get(language).cloned().unwrap_or_default()
    }

    /// Returns the value for a language without copying it.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.values.get(language).map(String::as_str)
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.values.contains_key(language)
    }

    /// Returns true if no language has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the language tags that have a value.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over `(language, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl TryFrom<&Value> for LocalizedString {
    type Error = MappingError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedString
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut localized = Self::new();
        for (language, value) in iter {
            localized.set_value(language, value);
        }
        localized
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LocalizedString
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::MalformedInput;

    #[test]
    fn new_is_empty() {
        let localized = LocalizedString::new();
        assert!(localized.is_empty());
        assert_eq!(localized.len(), 0);
    }

    #[test]
    fn absent_source_is_empty() {
        assert!(LocalizedString::from_json(None).unwrap().is_empty());
        assert!(LocalizedString::from_json(Some(&json!(null))).unwrap().is_empty());
    }

    #[test]
    fn builds_from_json_object() {
        let source = json!({"en": "Shirt", "de": "Hemd"});
        let localized = LocalizedString::from_json(Some(&source)).unwrap();

        assert_eq!(localized.get_value("en"), "Shirt");
        assert_eq!(localized.get_value("de"), "Hemd");
        assert_eq!(localized.get_value("fr"), "");
        assert!(!localized.is_empty());
    }

    #[test]
    fn scalar_entries_use_their_json_text() {
        let source = json!({"en": 42, "de": true});
        let localized = LocalizedString::from_json(Some(&source)).unwrap();
        assert_eq!(localized.get_value("en"), "42");
        assert_eq!(localized.get_value("de"), "true");
    }

    #[test]
    fn null_entries_are_stored_empty() {
        let source = json!({"en": "Shirt", "de": null});
        let localized = LocalizedString::from_json(Some(&source)).unwrap();
        assert_eq!(localized.len(), 2);
        assert!(localized.contains_language("de"));
        assert_eq!(localized.get_value("de"), "");
        assert_eq!(localized.get_value("en"), "Shirt");
    }

    #[test]
    fn nested_entries_are_malformed() {
        let source = json!({"en": {"text": "Shirt"}});
        let err = LocalizedString::from_json(Some(&source)).unwrap_err();
        assert!(matches!(
            err,
            MappingError::MalformedInput(MalformedInput::WrongKind {
                found: JsonKind::Object,
                ..
            })
        ));

        let source = json!({"en": ["Shirt"]});
        assert!(LocalizedString::from_json(Some(&source)).unwrap_err().is_malformed());
    }

    #[test]
    fn non_object_source_is_malformed() {
        let err = LocalizedString::from_json(Some(&json!("Shirt"))).unwrap_err();
        assert!(matches!(
            err,
            MappingError::MalformedInput(MalformedInput::NotAnObject { .. })
        ));
    }

    #[test]
    fn set_value_round_trips() {
        let mut localized = LocalizedString::new();
        localized.set_value("en-US", "Color");
        assert_eq!(localized.get_value("en-US"), "Color");
        assert!(!localized.is_empty());
    }

    #[test]
    fn set_value_overwrites() {
        let mut localized = LocalizedString::from([("en", "Shirt")]);
        localized.set_value("en", "T-Shirt");
        assert_eq!(localized.get_value("en"), "T-Shirt");
        assert_eq!(localized.len(), 1);
    }

    #[test]
    fn serializes_as_plain_object() {
        let localized = LocalizedString::new()
            .with_value("en", "Shirt")
            .with_value("de", "Hemd");
        let json = serde_json::to_value(&localized).unwrap();
        assert_eq!(json, json!({"de": "Hemd", "en": "Shirt"}));

        let back: LocalizedString = serde_json::from_value(json).unwrap();
        assert_eq!(back, localized);
    }

    #[test]
    fn iterates_languages() {
        let localized = LocalizedString::from([("en", "Shirt"), ("de", "Hemd")]);
        let languages: Vec<&str> = localized.languages().collect();
        assert_eq!(languages, vec!["de", "en"]);
        assert!(localized.contains_language("de"));
        assert_eq!(localized.get("fr"), None);
    }
}
