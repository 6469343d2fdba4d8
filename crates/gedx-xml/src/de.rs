use chrono::{TimeZone, Utc};
use gedx_core::common::{Date, Identifier, ResourceReference, TextValue};
use gedx_core::document::Document;
use gedx_core::records::{ChangeInfo, PlaceDescription};
use gedx_core::subject::{Attribution, Subject};
use gedx_core::uri::Uri;

use crate::error::XmlError;
use crate::node::{self, Node};

/// Parse a `<gedcomx>` document.
///
/// Unknown child elements are skipped so documents written by newer
/// producers still load.
///
/// # Errors
///
/// Returns `XmlError` if the input is not well-formed, the root is not
/// `gedcomx`, a reference lacks its `resource` attribute, or a numeric field
/// does not parse.
pub fn from_xml_str(xml: &str) -> Result<Document, XmlError> {
    let root = node::parse(xml)?;
    if root.name != "gedcomx" {
        return Err(XmlError::UnexpectedRoot(root.name));
    }

    let mut document = Document::new();
    for child in &root.children {
        match child.name.as_str() {
            "place" => document.places.push(place_from_node(child)?),
            "change" => document.changes.push(change_from_node(child)?),
            other => tracing::trace!(element = other, "skipping unknown gedcomx child"),
        }
    }
    tracing::debug!(
        places = document.places.len(),
        changes = document.changes.len(),
        "parsed gedcomx xml document"
    );
    Ok(document)
}

/// Parse a standalone `<place>` element.
///
/// # Errors
///
/// See [`from_xml_str`]; the root must be `place`.
pub fn place_description_from_xml(xml: &str) -> Result<PlaceDescription, XmlError> {
    let root = node::parse(xml)?;
    if root.name != "place" {
        return Err(XmlError::UnexpectedRoot(root.name));
    }
    place_from_node(&root)
}

/// Parse a standalone `<change>` element.
///
/// # Errors
///
/// See [`from_xml_str`]; the root must be `change`.
pub fn change_info_from_xml(xml: &str) -> Result<ChangeInfo, XmlError> {
    let root = node::parse(xml)?;
    if root.name != "change" {
        return Err(XmlError::UnexpectedRoot(root.name));
    }
    change_from_node(&root)
}

fn place_from_node(node: &Node) -> Result<PlaceDescription, XmlError> {
    let mut place = PlaceDescription::new();
    place.set_subject(subject_from_node(node)?);
    place.set_names(node.children_named("name").map(text_value_from_node).collect());
    place.set_place_type(node.attr("type").map(Uri::from));
    place.set_temporal_description(node.child("temporalDescription").map(date_from_node));
    place.set_latitude(decimal(node, "latitude")?);
    place.set_longitude(decimal(node, "longitude")?);
    place.set_spatial_description(
        node.child("spatialDescription")
            .map(reference_from_node)
            .transpose()?,
    );
    Ok(place)
}

fn change_from_node(node: &Node) -> Result<ChangeInfo, XmlError> {
    let mut change = ChangeInfo::new();
    change.set_operation(node.child_text("operation").map(Uri::from));
    change.set_object_type(node.attr("objectType").map(Uri::from));
    change.set_object_modifier(node.attr("objectModifier").map(Uri::from));
    change.set_reason(node.attr("reason").map(str::to_string));
    change.set_parent(optional_reference(node, "parent")?);
    change.set_resulting(optional_reference(node, "resulting")?);
    change.set_original(optional_reference(node, "original")?);
    change.set_removed(optional_reference(node, "removed")?);
    Ok(change)
}

fn subject_from_node(node: &Node) -> Result<Subject, XmlError> {
    let extracted = match node.attr("extracted") {
        None => None,
        Some("true" | "1") => Some(true),
        Some("false" | "0") => Some(false),
        Some(other) => {
            return Err(XmlError::InvalidValue {
                element: "extracted".to_string(),
                value: other.to_string(),
            });
        }
    };

    Ok(Subject {
        id: node.attr("id").map(str::to_string),
        lang: node.attr("lang").map(str::to_string),
        extracted,
        identifiers: node
            .children_named("identifier")
            .map(|child| Identifier {
                value: Uri::from(child.text.as_str()),
                identifier_type: child.attr("type").map(Uri::from),
            })
            .collect(),
        attribution: node
            .child("attribution")
            .map(attribution_from_node)
            .transpose()?,
    })
}

fn attribution_from_node(node: &Node) -> Result<Attribution, XmlError> {
    let modified = match node.child_text("modified") {
        None => None,
        Some(text) => {
            let millis: i64 = text.trim().parse().map_err(|_| XmlError::InvalidValue {
                element: "modified".to_string(),
                value: text.to_string(),
            })?;
            Some(
                Utc.timestamp_millis_opt(millis)
                    .single()
                    .ok_or_else(|| XmlError::InvalidValue {
                        element: "modified".to_string(),
                        value: text.to_string(),
                    })?,
            )
        }
    };

    Ok(Attribution {
        contributor: optional_reference(node, "contributor")?,
        modified,
        change_message: node.child_text("changeMessage").map(str::to_string),
    })
}

fn text_value_from_node(node: &Node) -> TextValue {
    TextValue {
        lang: node.attr("lang").map(str::to_string),
        value: node.text.clone(),
    }
}

fn date_from_node(node: &Node) -> Date {
    Date {
        original: node.child_text("original").map(str::to_string),
        formal: node.child_text("formal").map(str::to_string),
    }
}

fn reference_from_node(node: &Node) -> Result<ResourceReference, XmlError> {
    let resource = node
        .attr("resource")
        .ok_or_else(|| XmlError::MissingAttribute {
            element: node.name.clone(),
            attribute: "resource",
        })?;
    Ok(ResourceReference {
        resource: Uri::from(resource),
        resource_id: node.attr("resourceId").map(str::to_string),
    })
}

fn optional_reference(node: &Node, name: &str) -> Result<Option<ResourceReference>, XmlError> {
    node.child(name).map(reference_from_node).transpose()
}

fn decimal(node: &Node, name: &str) -> Result<Option<f64>, XmlError> {
    node.child_text(name)
        .map(|text| {
            text.trim().parse::<f64>().map_err(|_| XmlError::InvalidValue {
                element: name.to_string(),
                value: text.to_string(),
            })
        })
        .transpose()
}
