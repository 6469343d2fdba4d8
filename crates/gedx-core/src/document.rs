//! Document envelope.
//!
//! A `Document` is the unit exchanged by the XML binding and the CLI: a set
//! of place descriptions and change records, each list in document order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::records::{ChangeInfo, PlaceDescription};
use crate::validation::{self, ValidationRules, Violation};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub places: Vec<PlaceDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<ChangeInfo>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.changes.is_empty()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.places.len() + self.changes.len()
    }

    /// Look up a place by its subject id.
    #[must_use]
    pub fn place(&self, id: &str) -> Option<&PlaceDescription> {
        self.places.iter().find(|place| place.id() == Some(id))
    }

    /// Run the semantic checks selected by `rules` over every record.
    #[must_use]
    pub fn check(&self, rules: &ValidationRules) -> Vec<Violation> {
        let places = self.places.iter().enumerate().flat_map(|(index, place)| {
            validation::check_place(&validation::place_label(index, place), place, rules)
        });
        let changes = self
            .changes
            .iter()
            .enumerate()
            .flat_map(|(index, change)| validation::check_change(&format!("change[{index}]"), change));
        places.chain(changes).collect()
    }
}
