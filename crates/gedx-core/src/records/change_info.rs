use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::codec::{Term, UriEnum};
use crate::common::ResourceReference;
use crate::enums::{ChangeObjectModifier, ChangeObjectType, ChangeOperation, ChangeType};
use crate::uri::Uri;

/// Information about a single change to a genealogical conclusion.
///
/// The operation, object type and modifier are stored as raw URIs so that
/// values from newer vocabularies pass through untouched; the `known_*`
/// accessors decode them. An empty URI, whether passed to a setter or
/// read from JSON, is stored as absent, so `known_operation()` is `None`
/// exactly when `operation()` is.
///
/// Related records (`parent`, `resulting`, `original`, `removed`) are
/// references, never embedded copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    #[serde(
        default,
        deserialize_with = "deserialize_uri",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Uri>")]
    operation: Option<Uri>,
    #[serde(
        default,
        deserialize_with = "deserialize_uri",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Uri>")]
    object_type: Option<Uri>,
    #[serde(
        default,
        deserialize_with = "deserialize_uri",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Uri>")]
    object_modifier: Option<Uri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    /// The change that triggered, caused, or included this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<ResourceReference>,
    /// The subject as it exists after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resulting: Option<ResourceReference>,
    /// The value(s) that existed before the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original: Option<ResourceReference>,
    /// The value(s) removed by the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    removed: Option<ResourceReference>,
}

fn non_empty(uri: Option<Uri>) -> Option<Uri> {
    uri.filter(|uri| !uri.is_empty())
}

fn deserialize_uri<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Uri>, D::Error> {
    Option::<Uri>::deserialize(deserializer).map(non_empty)
}

fn known_uri<T: UriEnum>(variant: Option<T>) -> Option<Uri> {
    variant.map(|variant| Uri::from(variant.uri()))
}

impl ChangeInfo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- operation ---

    #[must_use]
    pub const fn operation(&self) -> Option<&Uri> {
        self.operation.as_ref()
    }

    pub fn set_operation(&mut self, operation: Option<Uri>) {
        self.operation = non_empty(operation);
    }

    #[must_use]
    pub fn known_operation(&self) -> Option<Term<ChangeOperation>> {
        self.operation.as_ref().and_then(|uri| Term::decode(uri.as_str()))
    }

    pub fn set_known_operation(&mut self, operation: Option<ChangeOperation>) {
        self.operation = known_uri(operation);
    }

    // --- object type ---

    #[must_use]
    pub const fn object_type(&self) -> Option<&Uri> {
        self.object_type.as_ref()
    }

    pub fn set_object_type(&mut self, object_type: Option<Uri>) {
        self.object_type = non_empty(object_type);
    }

    #[must_use]
    pub fn known_object_type(&self) -> Option<Term<ChangeObjectType>> {
        self.object_type
            .as_ref()
            .and_then(|uri| Term::decode(uri.as_str()))
    }

    pub fn set_known_object_type(&mut self, object_type: Option<ChangeObjectType>) {
        self.object_type = known_uri(object_type);
    }

    // --- object modifier ---

    #[must_use]
    pub const fn object_modifier(&self) -> Option<&Uri> {
        self.object_modifier.as_ref()
    }

    pub fn set_object_modifier(&mut self, object_modifier: Option<Uri>) {
        self.object_modifier = non_empty(object_modifier);
    }

    #[must_use]
    pub fn known_object_modifier(&self) -> Option<Term<ChangeObjectModifier>> {
        self.object_modifier
            .as_ref()
            .and_then(|uri| Term::decode(uri.as_str()))
    }

    pub fn set_known_object_modifier(&mut self, modifier: Option<ChangeObjectModifier>) {
        self.object_modifier = known_uri(modifier);
    }

    // --- reason and references ---

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn set_reason(&mut self, reason: Option<String>) {
        self.reason = reason;
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&ResourceReference> {
        self.parent.as_ref()
    }

    pub fn set_parent(&mut self, parent: Option<ResourceReference>) {
        self.parent = parent;
    }

    #[must_use]
    pub const fn resulting(&self) -> Option<&ResourceReference> {
        self.resulting.as_ref()
    }

    pub fn set_resulting(&mut self, resulting: Option<ResourceReference>) {
        self.resulting = resulting;
    }

    #[must_use]
    pub const fn original(&self) -> Option<&ResourceReference> {
        self.original.as_ref()
    }

    pub fn set_original(&mut self, original: Option<ResourceReference>) {
        self.original = original;
    }

    #[must_use]
    pub const fn removed(&self) -> Option<&ResourceReference> {
        self.removed.as_ref()
    }

    pub fn set_removed(&mut self, removed: Option<ResourceReference>) {
        self.removed = removed;
    }
}

impl From<ChangeType> for ChangeInfo {
    fn from(change_type: ChangeType) -> Self {
        Self {
            operation: known_uri(Some(change_type.operation)),
            object_type: known_uri(Some(change_type.object_type)),
            object_modifier: known_uri(change_type.object_modifier),
            ..Self::default()
        }
    }
}
