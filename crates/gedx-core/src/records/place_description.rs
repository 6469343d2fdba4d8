use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer, ser::Error as _};

use crate::common::{Date, ResourceReference, TextValue};
use crate::errors::CoreError;
use crate::subject::Subject;
use crate::uri::Uri;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A description of a place as a snapshot in time: its names, and possibly
/// its type, time period, and geospatial location.
///
/// Names are kept in order of preference, the first being the primary name.
/// At least one name is expected but not required by the type.
///
/// `set_latitude` / `set_longitude` accept any value. Use the `try_set_*`
/// variants or [`validate`](Self::validate) to enforce the ranges
/// (latitude −90..=90 degrees, longitude −180..=180 degrees).
///
/// NaN and infinite coordinates can be stored but not serialized: JSON has
/// no representation for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDescription {
    #[serde(flatten)]
    subject: Subject,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    names: Vec<TextValue>,
    /// Implementation-specific place type (address, city, county, country, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    place_type: Option<Uri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temporal_description: Option<Date>,
    #[serde(
        default,
        serialize_with = "serialize_finite",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    latitude: Option<f64>,
    #[serde(
        default,
        serialize_with = "serialize_finite",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    longitude: Option<f64>,
    /// Typically resolves to a KML document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spatial_description: Option<ResourceReference>,
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn serialize_finite<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(number) if !number.is_finite() => Err(S::Error::custom(format!(
            "coordinate {number} is not a finite number"
        ))),
        _ => value.serialize(serializer),
    }
}

/// Check one coordinate against its range.
///
/// # Errors
///
/// Returns `CoreError::CoordinateOutOfRange` for values outside `range` and
/// for NaN or infinite values.
pub fn check_coordinate(field: &'static str, value: f64, range: (f64, f64)) -> Result<(), CoreError> {
    let (min, max) = range;
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::CoordinateOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl PlaceDescription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor with a single primary name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let mut place = Self::default();
        place.add_name(TextValue::new(name));
        place
    }

    // --- subject ---

    #[must_use]
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    pub const fn subject_mut(&mut self) -> &mut Subject {
        &mut self.subject
    }

    pub fn set_subject(&mut self, subject: Subject) {
        self.subject = subject;
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.subject.id.as_deref()
    }

    // --- names ---

    #[must_use]
    pub fn names(&self) -> &[TextValue] {
        &self.names
    }

    pub fn set_names(&mut self, names: Vec<TextValue>) {
        self.names = names;
    }

    /// Append a name after any existing ones.
    pub fn add_name(&mut self, name: TextValue) {
        self.names.push(name);
    }

    #[must_use]
    pub fn primary_name(&self) -> Option<&TextValue> {
        self.names.first()
    }

    // --- type and time ---

    #[must_use]
    pub const fn place_type(&self) -> Option<&Uri> {
        self.place_type.as_ref()
    }

    pub fn set_place_type(&mut self, place_type: Option<Uri>) {
        self.place_type = place_type;
    }

    #[must_use]
    pub const fn temporal_description(&self) -> Option<&Date> {
        self.temporal_description.as_ref()
    }

    pub fn set_temporal_description(&mut self, temporal_description: Option<Date>) {
        self.temporal_description = temporal_description;
    }

    // --- coordinates ---

    #[must_use]
    pub const fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub const fn set_latitude(&mut self, latitude: Option<f64>) {
        self.latitude = latitude;
    }

    /// Set the latitude, rejecting values outside −90..=90.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CoordinateOutOfRange`; the stored value is unchanged.
    pub fn try_set_latitude(&mut self, latitude: f64) -> Result<(), CoreError> {
        check_coordinate("latitude", latitude, LATITUDE_RANGE)?;
        self.latitude = Some(latitude);
        Ok(())
    }

    #[must_use]
    pub const fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub const fn set_longitude(&mut self, longitude: Option<f64>) {
        self.longitude = longitude;
    }

    /// Set the longitude, rejecting values outside −180..=180.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CoordinateOutOfRange`; the stored value is unchanged.
    pub fn try_set_longitude(&mut self, longitude: f64) -> Result<(), CoreError> {
        check_coordinate("longitude", longitude, LONGITUDE_RANGE)?;
        self.longitude = Some(longitude);
        Ok(())
    }

    /// `(latitude, longitude)` when both are present.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Check the stored coordinates against their ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range coordinate, latitude first.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(lat) = self.latitude {
            check_coordinate("latitude", lat, LATITUDE_RANGE)?;
        }
        if let Some(lon) = self.longitude {
            check_coordinate("longitude", lon, LONGITUDE_RANGE)?;
        }
        Ok(())
    }

    // --- spatial description ---

    #[must_use]
    pub const fn spatial_description(&self) -> Option<&ResourceReference> {
        self.spatial_description.as_ref()
    }

    pub fn set_spatial_description(&mut self, spatial_description: Option<ResourceReference>) {
        self.spatial_description = spatial_description;
    }
}
