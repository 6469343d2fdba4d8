//! # gedx-core
//!
//! Record types and URI vocabularies for the gedx genealogical interchange
//! format.
//!
//! This crate provides the foundational types shared across all gedx crates:
//! - The enum-URI codec (`UriEnum`, `Term`) and the change vocabularies
//! - Common values: `Uri`, `ResourceReference`, `TextValue`, `Date`, `Identifier`
//! - `Subject` and `Attribution`, held by value in conclusion records
//! - `ChangeInfo` and `PlaceDescription` records
//! - The `Document` envelope and opt-in semantic validation
//! - Cross-cutting error types

pub mod codec;
pub mod common;
pub mod document;
pub mod enums;
pub mod errors;
pub mod records;
pub mod subject;
pub mod uri;
pub mod validation;
