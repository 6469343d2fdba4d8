//! Errors raised by [`crate::SchemaRegistry`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No record schema is registered under this name.
    #[error("no schema registered as {0:?}")]
    UnknownSchema(String),

    /// The JSON value does not conform to the named record schema.
    #[error(
        "value does not match the {schema} schema ({} error(s)): {}",
        .errors.len(),
        .errors.join("; ")
    )]
    Invalid {
        schema: &'static str,
        errors: Vec<String>,
    },

    /// The generated schema was rejected by the validator.
    #[error("{schema} schema does not compile: {reason}")]
    Compile { schema: &'static str, reason: String },
}
