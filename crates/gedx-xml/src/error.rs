//! XML binding error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    /// Tokenizer or escaping error from quick-xml.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("xml attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xml output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A number, timestamp or boolean did not parse.
    #[error("invalid value for {element}: {value:?}")]
    InvalidValue { element: String, value: String },

    /// NaN and infinities have no portable text form.
    #[error("<{element}> must be a finite number, got {value}")]
    NonFinite { element: &'static str, value: f64 },

    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("unexpected root element <{0}>")]
    UnexpectedRoot(String),

    /// Structural problem the tokenizer did not catch (unclosed elements).
    #[error("malformed xml: {0}")]
    Malformed(&'static str),

    #[error("xml input has no root element")]
    Empty,
}
