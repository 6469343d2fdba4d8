//! XML writer configuration.

use gedx_xml::XmlOptions;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest accepted indent width.
pub const MAX_INDENT: usize = 16;

const fn default_indent() -> usize {
    2
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct XmlConfig {
    /// Spaces per nesting level; `0` writes compact output.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Whether `<change>` elements carry the `objectType` attribute.
    #[serde(default = "default_true")]
    pub emit_object_type: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            emit_object_type: true,
        }
    }
}

impl XmlConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `indent` exceeds [`MAX_INDENT`].
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.indent > MAX_INDENT {
            return Err(ConfigError::InvalidValue {
                field: "xml.indent".to_string(),
                reason: format!("{} exceeds the maximum of {MAX_INDENT}", self.indent),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn options(&self) -> XmlOptions {
        XmlOptions {
            indent: self.indent,
            emit_object_type: self.emit_object_type,
        }
    }
}
