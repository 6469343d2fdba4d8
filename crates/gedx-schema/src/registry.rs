//! Central schema registry for all gedx record types.
//!
//! The `SchemaRegistry` builds JSON Schemas from gedx-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the gedx model.
///
/// Built from gedx-core types via [`schemars::schema_for!`]. Provides lookup
/// by name and validation of arbitrary JSON values against registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the value, record, and envelope
    /// schemas from gedx-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Common values (7) ---
        register!(schemas, "uri", gedx_core::uri::Uri);
        register!(
            schemas,
            "resource_reference",
            gedx_core::common::ResourceReference
        );
        register!(schemas, "text_value", gedx_core::common::TextValue);
        register!(schemas, "date", gedx_core::common::Date);
        register!(schemas, "identifier", gedx_core::common::Identifier);
        register!(schemas, "attribution", gedx_core::subject::Attribution);
        register!(schemas, "subject", gedx_core::subject::Subject);

        // --- Records (3) ---
        register!(schemas, "change_info", gedx_core::records::ChangeInfo);
        register!(schemas, "change_type", gedx_core::enums::ChangeType);
        register!(
            schemas,
            "place_description",
            gedx_core::records::PlaceDescription
        );

        // --- Envelope (1) ---
        register!(schemas, "document", gedx_core::document::Document);

        tracing::debug!(count = schemas.len(), "schema registry built");
        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownSchema` if the schema name is unknown, or
    /// `SchemaError::Invalid` carrying every validator message otherwise.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let (&schema_name, schema) = self
            .schemas
            .get_key_value(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;

        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
            schema: schema_name,
            reason: e.to_string(),
        })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                schema = schema_name,
                errors = errors.len(),
                "schema validation failed"
            );
            Err(SchemaError::Invalid {
                schema: schema_name,
                errors,
            })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
