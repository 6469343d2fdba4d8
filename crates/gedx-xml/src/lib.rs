//! # gedx-xml
//!
//! XML binding for gedx records, built on `quick-xml` events.
//!
//! ## Mapping
//!
//! | record | element | attributes | child elements (in order) |
//! |--------|---------|------------|---------------------------|
//! | `Document` | `gedcomx` | `xmlns` | `place*`, `change*` |
//! | `PlaceDescription` | `place` | `id`, `xml:lang`, `extracted`, `type` | `identifier*`, `attribution`, `name*`, `temporalDescription`, `latitude`, `longitude`, `spatialDescription` |
//! | `ChangeInfo` | `change` | `objectType`, `objectModifier`, `reason` | `operation`, `parent`, `resulting`, `original`, `removed` |
//! | `ResourceReference` | (field name) | `resource`, `resourceId` | |
//! | `TextValue` | `name` | `xml:lang` | text |
//!
//! The writer always emits children in the order above. The reader accepts
//! any order, matches on local names (prefixes are ignored), and skips
//! elements and attributes it does not know.
//!
//! ```
//! use gedx_core::document::Document;
//! use gedx_core::records::PlaceDescription;
//! use gedx_xml::{XmlOptions, from_xml_str, to_xml_string};
//!
//! let doc = Document {
//!     places: vec![PlaceDescription::named("Boston")],
//!     changes: vec![],
//! };
//! let xml = to_xml_string(&doc, &XmlOptions::default()).unwrap();
//! assert_eq!(from_xml_str(&xml).unwrap(), doc);
//! ```

mod de;
mod error;
mod node;
mod options;
mod ser;

pub use de::{change_info_from_xml, from_xml_str, place_description_from_xml};
pub use error::XmlError;
pub use options::XmlOptions;
pub use ser::{change_info_to_xml, place_description_to_xml, to_xml_string};

/// Default namespace of gedcomx XML documents.
pub const GEDCOMX_XML_NAMESPACE: &str = "http://gedcomx.org/v1/";
