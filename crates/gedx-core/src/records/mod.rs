//! Record types.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Fields are private; mutation goes through
//! explicit setters. Records are plain values with a single owner: concurrent
//! reads of distinct instances are fine, and no internal locking is provided.

mod change_info;
mod place_description;

pub use change_info::ChangeInfo;
pub use place_description::{
    LATITUDE_RANGE, LONGITUDE_RANGE, PlaceDescription, check_coordinate,
};
