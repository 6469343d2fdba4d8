use std::path::Path;

use anyhow::Context;
use gedx_core::document::Document;
use gedx_xml::XmlOptions;

use crate::cli::root_commands::DocumentFormat;

pub fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

pub fn parse_document(text: &str, format: DocumentFormat) -> anyhow::Result<Document> {
    match format {
        DocumentFormat::Json => serde_json::from_str(text).context("invalid JSON document"),
        DocumentFormat::Xml => gedx_xml::from_xml_str(text).context("invalid XML document"),
    }
}

pub fn render_document(
    document: &Document,
    format: DocumentFormat,
    xml: &XmlOptions,
) -> anyhow::Result<String> {
    match format {
        DocumentFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        DocumentFormat::Xml => Ok(gedx_xml::to_xml_string(document, xml)?),
    }
}

#[cfg(test)]
mod tests {
    use gedx_core::records::PlaceDescription;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_and_parses_both_formats() {
        let doc = Document {
            places: vec![PlaceDescription::named("Salem")],
            changes: vec![],
        };
        for format in [DocumentFormat::Json, DocumentFormat::Xml] {
            let text = render_document(&doc, format, &XmlOptions::default()).unwrap();
            assert_eq!(parse_document(&text, format).unwrap(), doc);
        }
    }

    #[test]
    fn read_missing_file_names_the_path() {
        let err = read_text(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
