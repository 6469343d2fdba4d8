//! # gedx-schema
//!
//! JSON Schema generation, validation, and registry for gedx records.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas of every record type
//! - Validation of arbitrary JSON values against a named schema
//! - Schema export for external tooling (`gedx schema show`)
//!
//! ## Architecture
//!
//! Record types are defined in `gedx-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and export layer.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
