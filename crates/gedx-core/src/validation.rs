//! Opt-in semantic checks over records.
//!
//! Nothing here mutates or rejects a record on its own; callers decide what
//! to do with the returned [`Violation`]s.

use serde::{Deserialize, Serialize};

use crate::records::{
    ChangeInfo, LATITUDE_RANGE, LONGITUDE_RANGE, PlaceDescription, check_coordinate,
};

/// Which checks to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Enforce latitude/longitude ranges.
    pub strict_coordinates: bool,
    /// Require at least one name on every place.
    pub require_place_name: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            strict_coordinates: false,
            require_place_name: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Record label, e.g. `place[0]` or `place[P-1]`.
    pub record: String,
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

impl Violation {
    fn error(record: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            record: record.to_string(),
            field: field.to_string(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(record: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            record: record.to_string(),
            field: field.to_string(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Label for the place at `index`, preferring its id.
#[must_use]
pub fn place_label(index: usize, place: &PlaceDescription) -> String {
    place
        .id()
        .map_or_else(|| format!("place[{index}]"), |id| format!("place[{id}]"))
}

#[must_use]
pub fn check_place(
    label: &str,
    place: &PlaceDescription,
    rules: &ValidationRules,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if rules.require_place_name && place.names().is_empty() {
        violations.push(Violation::error(
            label,
            "names",
            "at least one name is required",
        ));
    }

    if place.names().iter().any(|name| name.value.trim().is_empty()) {
        violations.push(Violation::warning(label, "names", "blank name value"));
    }

    if rules.strict_coordinates {
        if let Some(lat) = place.latitude()
            && let Err(error) = check_coordinate("latitude", lat, LATITUDE_RANGE)
        {
            violations.push(Violation::error(label, "latitude", error.to_string()));
        }
        if let Some(lon) = place.longitude()
            && let Err(error) = check_coordinate("longitude", lon, LONGITUDE_RANGE)
        {
            violations.push(Violation::error(label, "longitude", error.to_string()));
        }
        match (place.latitude(), place.longitude()) {
            (Some(_), None) => violations.push(Violation::warning(
                label,
                "longitude",
                "latitude given without longitude",
            )),
            (None, Some(_)) => violations.push(Violation::warning(
                label,
                "latitude",
                "longitude given without latitude",
            )),
            _ => {}
        }
    }

    violations
}

#[must_use]
pub fn check_change(label: &str, change: &ChangeInfo) -> Vec<Violation> {
    let mut violations = Vec::new();

    if change.operation().is_none() {
        violations.push(Violation::warning(
            label,
            "operation",
            "change has no operation",
        ));
    }
    if change.object_type().is_none() {
        violations.push(Violation::warning(
            label,
            "objectType",
            "change has no object type",
        ));
    }
    if let Some(term) = change.known_operation()
        && term.is_custom()
    {
        tracing::debug!(label, uri = term.uri(), "change uses an unregistered operation");
    }

    violations
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::{ChangeObjectType, ChangeOperation, ChangeType};

    #[test]
    fn default_rules_skip_coordinates() {
        let mut place = PlaceDescription::named("Somewhere");
        place.set_latitude(Some(400.0));
        let violations = check_place("place[0]", &place, &ValidationRules::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn strict_rules_report_each_axis() {
        let mut place = PlaceDescription::named("Somewhere");
        place.set_latitude(Some(400.0));
        place.set_longitude(Some(-200.0));
        let rules = ValidationRules {
            strict_coordinates: true,
            ..ValidationRules::default()
        };
        let violations = check_place("place[0]", &place, &rules);
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["latitude", "longitude"]);
        assert!(violations.iter().all(|v| v.severity == Severity::Error));
    }

    #[test]
    fn missing_name_is_an_error_unless_disabled() {
        let place = PlaceDescription::new();
        let violations = check_place("place[0]", &place, &ValidationRules::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "names");

        let relaxed = ValidationRules {
            require_place_name: false,
            ..ValidationRules::default()
        };
        assert!(check_place("place[0]", &place, &relaxed).is_empty());
    }

    #[test]
    fn half_coordinates_warn() {
        let mut place = PlaceDescription::named("Somewhere");
        place.set_latitude(Some(10.0));
        let rules = ValidationRules {
            strict_coordinates: true,
            ..ValidationRules::default()
        };
        let violations = check_place("place[0]", &place, &rules);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn change_without_operation_warns() {
        let violations = check_change("change[0]", &ChangeInfo::new());
        assert_eq!(violations.len(), 2);

        let complete = ChangeInfo::from(ChangeType::new(
            ChangeOperation::Create,
            ChangeObjectType::Person,
        ));
        assert!(check_change("change[1]", &complete).is_empty());
    }

    #[test]
    fn label_prefers_id() {
        let mut place = PlaceDescription::new();
        assert_eq!(place_label(3, &place), "place[3]");
        place.subject_mut().id = Some("P-9".into());
        assert_eq!(place_label(3, &place), "place[P-9]");
    }
}
