//! Semantic validation configuration.

use gedx_core::validation::ValidationRules;
use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Report coordinates outside [-90, 90] / [-180, 180].
    #[serde(default)]
    pub strict_coordinates: bool,

    #[serde(default = "default_true")]
    pub require_place_name: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_coordinates: false,
            require_place_name: true,
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub const fn rules(&self) -> ValidationRules {
        ValidationRules {
            strict_coordinates: self.strict_coordinates,
            require_place_name: self.require_place_name,
        }
    }
}
