//! Small value types shared by the records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::uri::Uri;

/// A reference to another resource by URI, without embedding it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReference {
    pub resource: Uri,
    /// Local identifier of the target, when the resource is in the same document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl ResourceReference {
    #[must_use]
    pub fn new(resource: impl Into<Uri>) -> Self {
        Self {
            resource: resource.into(),
            resource_id: None,
        }
    }

    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }
}

/// A string with an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TextValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub value: String,
}

impl TextValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            lang: None,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// A genealogical date or period: the text as recorded plus an optional
/// formal (standardized) rendering. Neither form is interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Date {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal: Option<String>,
}

impl Date {
    #[must_use]
    pub fn original(text: impl Into<String>) -> Self {
        Self {
            original: Some(text.into()),
            formal: None,
        }
    }

    #[must_use]
    pub fn with_formal(mut self, formal: impl Into<String>) -> Self {
        self.formal = Some(formal.into());
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.original.is_none() && self.formal.is_none()
    }
}

/// An external identifier for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Identifier {
    pub value: Uri,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<Uri>,
}

impl Identifier {
    #[must_use]
    pub fn new(value: impl Into<Uri>) -> Self {
        Self {
            value: value.into(),
            identifier_type: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, identifier_type: impl Into<Uri>) -> Self {
        self.identifier_type = Some(identifier_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resource_reference_camel_case() {
        let r = ResourceReference::new("https://example.org/places/1").with_resource_id("P1");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"resource": "https://example.org/places/1", "resourceId": "P1"})
        );
    }

    #[test]
    fn text_value_omits_missing_lang() {
        let json = serde_json::to_value(TextValue::new("Boston")).unwrap();
        assert_eq!(json, serde_json::json!({"value": "Boston"}));
    }

    #[test]
    fn identifier_type_is_renamed() {
        let id = Identifier::new("urn:ark:1").with_type("http://gedcomx.org/Primary");
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["type"], "http://gedcomx.org/Primary");
    }

    #[test]
    fn empty_date() {
        assert!(Date::default().is_empty());
        assert!(!Date::original("about 1850").is_empty());
    }
}
