//! Error types for gedx-core.
//!
//! Decoding vocabulary URIs never fails (see [`crate::codec`]); these errors
//! come from strict lookups and from opt-in record validation. Crates that do
//! I/O (`gedx-xml`, `gedx-config`) define their own error enums.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A strict lookup was given a URI outside the vocabulary.
    #[error("Unknown {vocabulary} URI: {uri}")]
    UnknownTerm {
        vocabulary: &'static str,
        uri: String,
    },

    /// A latitude or longitude outside its range, or not a finite number.
    #[error("Coordinate out of range: {field} = {value} (expected {min} to {max})")]
    CoordinateOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
