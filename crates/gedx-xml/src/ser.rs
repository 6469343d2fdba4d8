use std::io::Cursor;

use gedx_core::common::{Date, Identifier, ResourceReference, TextValue};
use gedx_core::document::Document;
use gedx_core::records::{ChangeInfo, PlaceDescription};
use gedx_core::subject::{Attribution, Subject};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::GEDCOMX_XML_NAMESPACE;
use crate::error::XmlError;
use crate::options::XmlOptions;

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn new_writer(options: &XmlOptions) -> XmlWriter {
    let sink = Cursor::new(Vec::new());
    if options.indent == 0 {
        Writer::new(sink)
    } else {
        Writer::new_with_indent(sink, b' ', options.indent)
    }
}

fn finish(writer: XmlWriter) -> Result<String, XmlError> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_decl(writer: &mut XmlWriter) -> Result<(), XmlError> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(())
}

/// Serialize a whole document as a `<gedcomx>` element.
///
/// # Errors
///
/// Returns `XmlError::NonFinite` for a NaN or infinite coordinate, or another
/// `XmlError` if the writer fails.
pub fn to_xml_string(document: &Document, options: &XmlOptions) -> Result<String, XmlError> {
    let mut writer = new_writer(options);
    write_decl(&mut writer)?;

    let mut root = BytesStart::new("gedcomx");
    root.push_attribute(("xmlns", GEDCOMX_XML_NAMESPACE));

    if document.is_empty() {
        writer.write_event(Event::Empty(root))?;
    } else {
        writer.write_event(Event::Start(root))?;
        for place in &document.places {
            write_place(&mut writer, place, false)?;
        }
        for change in &document.changes {
            write_change(&mut writer, change, options, false)?;
        }
        writer.write_event(Event::End(BytesEnd::new("gedcomx")))?;
    }

    tracing::debug!(
        places = document.places.len(),
        changes = document.changes.len(),
        "wrote gedcomx xml document"
    );
    finish(writer)
}

/// Serialize one place as a standalone `<place>` element.
///
/// # Errors
///
/// See [`to_xml_string`].
pub fn place_description_to_xml(
    place: &PlaceDescription,
    options: &XmlOptions,
) -> Result<String, XmlError> {
    let mut writer = new_writer(options);
    write_place(&mut writer, place, true)?;
    finish(writer)
}

/// Serialize one change as a standalone `<change>` element.
///
/// # Errors
///
/// See [`to_xml_string`].
pub fn change_info_to_xml(change: &ChangeInfo, options: &XmlOptions) -> Result<String, XmlError> {
    let mut writer = new_writer(options);
    write_change(&mut writer, change, options, true)?;
    finish(writer)
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

fn write_place(
    writer: &mut XmlWriter,
    place: &PlaceDescription,
    standalone: bool,
) -> Result<(), XmlError> {
    let mut start = BytesStart::new("place");
    if standalone {
        start.push_attribute(("xmlns", GEDCOMX_XML_NAMESPACE));
    }
    push_subject_attributes(&mut start, place.subject());
    if let Some(place_type) = place.place_type() {
        start.push_attribute(("type", place_type.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    write_subject_elements(writer, place.subject())?;
    for name in place.names() {
        write_text_value(writer, "name", name)?;
    }
    if let Some(date) = place.temporal_description() {
        write_date(writer, "temporalDescription", date)?;
    }
    if let Some(latitude) = place.latitude() {
        write_coordinate(writer, "latitude", latitude)?;
    }
    if let Some(longitude) = place.longitude() {
        write_coordinate(writer, "longitude", longitude)?;
    }
    if let Some(spatial) = place.spatial_description() {
        write_reference(writer, "spatialDescription", spatial)?;
    }

    writer.write_event(Event::End(BytesEnd::new("place")))?;
    Ok(())
}

fn write_change(
    writer: &mut XmlWriter,
    change: &ChangeInfo,
    options: &XmlOptions,
    standalone: bool,
) -> Result<(), XmlError> {
    let mut start = BytesStart::new("change");
    if standalone {
        start.push_attribute(("xmlns", GEDCOMX_XML_NAMESPACE));
    }
    if options.emit_object_type
        && let Some(object_type) = change.object_type()
    {
        start.push_attribute(("objectType", object_type.as_str()));
    }
    if let Some(modifier) = change.object_modifier() {
        start.push_attribute(("objectModifier", modifier.as_str()));
    }
    if let Some(reason) = change.reason() {
        start.push_attribute(("reason", reason));
    }
    writer.write_event(Event::Start(start))?;

    if let Some(operation) = change.operation() {
        write_text_element(writer, "operation", operation.as_str())?;
    }
    let references = [
        ("parent", change.parent()),
        ("resulting", change.resulting()),
        ("original", change.original()),
        ("removed", change.removed()),
    ];
    for (name, reference) in references {
        if let Some(reference) = reference {
            write_reference(writer, name, reference)?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("change")))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

fn push_subject_attributes(start: &mut BytesStart<'_>, subject: &Subject) {
    if let Some(id) = &subject.id {
        start.push_attribute(("id", id.as_str()));
    }
    if let Some(lang) = &subject.lang {
        start.push_attribute(("xml:lang", lang.as_str()));
    }
    if let Some(extracted) = subject.extracted {
        start.push_attribute(("extracted", if extracted { "true" } else { "false" }));
    }
}

fn write_subject_elements(writer: &mut XmlWriter, subject: &Subject) -> Result<(), XmlError> {
    for identifier in &subject.identifiers {
        write_identifier(writer, identifier)?;
    }
    if let Some(attribution) = &subject.attribution {
        write_attribution(writer, attribution)?;
    }
    Ok(())
}

fn write_identifier(writer: &mut XmlWriter, identifier: &Identifier) -> Result<(), XmlError> {
    let mut start = BytesStart::new("identifier");
    if let Some(identifier_type) = &identifier.identifier_type {
        start.push_attribute(("type", identifier_type.as_str()));
    }
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(identifier.value.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new("identifier")))?;
    Ok(())
}

fn write_attribution(writer: &mut XmlWriter, attribution: &Attribution) -> Result<(), XmlError> {
    writer.write_event(Event::Start(BytesStart::new("attribution")))?;
    if let Some(contributor) = &attribution.contributor {
        write_reference(writer, "contributor", contributor)?;
    }
    if let Some(modified) = attribution.modified {
        write_text_element(writer, "modified", &modified.timestamp_millis().to_string())?;
    }
    if let Some(message) = &attribution.change_message {
        write_text_element(writer, "changeMessage", message)?;
    }
    writer.write_event(Event::End(BytesEnd::new("attribution")))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), XmlError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_coordinate(
    writer: &mut XmlWriter,
    name: &'static str,
    value: f64,
) -> Result<(), XmlError> {
    if !value.is_finite() {
        return Err(XmlError::NonFinite { element: name, value });
    }
    write_text_element(writer, name, &value.to_string())
}

fn write_text_value(writer: &mut XmlWriter, name: &str, value: &TextValue) -> Result<(), XmlError> {
    let mut start = BytesStart::new(name);
    if let Some(lang) = &value.lang {
        start.push_attribute(("xml:lang", lang.as_str()));
    }
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(&value.value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_date(writer: &mut XmlWriter, name: &str, date: &Date) -> Result<(), XmlError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    if let Some(original) = &date.original {
        write_text_element(writer, "original", original)?;
    }
    if let Some(formal) = &date.formal {
        write_text_element(writer, "formal", formal)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_reference(
    writer: &mut XmlWriter,
    name: &str,
    reference: &ResourceReference,
) -> Result<(), XmlError> {
    let mut start = BytesStart::new(name);
    start.push_attribute(("resource", reference.resource.as_str()));
    if let Some(resource_id) = &reference.resource_id {
        start.push_attribute(("resourceId", resource_id.as_str()));
    }
    writer.write_event(Event::Empty(start))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use gedx_core::enums::{ChangeObjectType, ChangeOperation, ChangeType};
    use gedx_core::uri::Uri;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_is_self_closing() {
        let xml = to_xml_string(&Document::new(), &XmlOptions::compact()).unwrap();
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?><gedcomx xmlns="http://gedcomx.org/v1/"/>"#
        );
    }

    #[test]
    fn compact_change_layout() {
        let mut change = ChangeInfo::from(ChangeType::new(
            ChangeOperation::Create,
            ChangeObjectType::Person,
        ));
        change.set_reason(Some("new & \"improved\"".into()));
        change.set_resulting(Some(ResourceReference::new("https://example.org/p/1")));

        let xml = change_info_to_xml(&change, &XmlOptions::compact()).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<change xmlns="http://gedcomx.org/v1/" objectType="http://gedcomx.org/Person" "#,
                r#"reason="new &amp; &quot;improved&quot;">"#,
                r#"<operation>http://gedcomx.org/Create</operation>"#,
                r#"<resulting resource="https://example.org/p/1"/>"#,
                r#"</change>"#
            )
        );
    }

    #[test]
    fn object_type_can_be_suppressed() {
        let change = ChangeInfo::from(ChangeType::new(
            ChangeOperation::Update,
            ChangeObjectType::Birth,
        ));
        let options = XmlOptions {
            emit_object_type: false,
            ..XmlOptions::compact()
        };
        let xml = change_info_to_xml(&change, &options).unwrap();
        assert!(!xml.contains("objectType"));
        assert!(xml.contains("<operation>http://gedcomx.org/Update</operation>"));
    }

    #[test]
    fn place_elements_follow_fixed_order() {
        let mut place = PlaceDescription::new();
        // Populate in reverse of the wire order.
        place.set_spatial_description(Some(ResourceReference::new("https://example.org/k.kml")));
        place.set_longitude(Some(-71.5));
        place.set_latitude(Some(42.25));
        place.set_temporal_description(Some(Date::original("1900")));
        place.add_name(TextValue::new("Boston"));
        place.set_place_type(Some(Uri::from("urn:type:city")));

        let xml = place_description_to_xml(&place, &XmlOptions::default()).unwrap();
        let positions: Vec<usize> = [
            "<name",
            "<temporalDescription",
            "<latitude",
            "<longitude",
            "<spatialDescription",
        ]
        .iter()
        .map(|tag| xml.find(tag).unwrap())
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(xml.contains(r#"type="urn:type:city""#));
        assert!(xml.contains("<latitude>42.25</latitude>"));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let mut place = PlaceDescription::named("Nowhere");
        place.set_longitude(Some(f64::NAN));
        let err = place_description_to_xml(&place, &XmlOptions::compact()).unwrap_err();
        assert!(matches!(err, XmlError::NonFinite { element: "longitude", .. }));

        let doc = Document {
            places: vec![place],
            changes: vec![],
        };
        assert!(to_xml_string(&doc, &XmlOptions::default()).is_err());
    }

    #[test]
    fn name_lang_uses_xml_lang() {
        let mut place = PlaceDescription::new();
        place.add_name(TextValue::new("Wien").with_lang("de"));
        let xml = place_description_to_xml(&place, &XmlOptions::compact()).unwrap();
        assert!(xml.contains(r#"<name xml:lang="de">Wien</name>"#));
    }
}
