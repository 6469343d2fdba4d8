use std::path::Path;

use anyhow::{Context, bail};
use gedx_config::GedxConfig;
use gedx_core::document::Document;
use gedx_core::validation::{Severity, ValidationRules, Violation};
use gedx_schema::{SchemaError, SchemaRegistry};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{DocumentFormat, ValidateArgs};
use crate::commands::shared::document::{parse_document, read_text};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub format: DocumentFormat,
    pub valid: bool,
    pub records: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schema_errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    fn error_count(&self) -> usize {
        self.schema_errors.len()
            + self
                .violations
                .iter()
                .filter(|violation| violation.severity == Severity::Error)
                .count()
    }
}

/// Handle `gedx validate`.
pub fn handle(args: &ValidateArgs, config: &GedxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let report = check(&args.input, &config.validation.rules(), &registry)?;

    if !flags.quiet || !report.valid {
        output(&report, flags.format)?;
    }
    if !report.valid {
        bail!(
            "{} failed validation with {} error(s)",
            args.input.display(),
            report.error_count()
        );
    }
    Ok(())
}

/// Validate the document at `path`.
///
/// JSON input is first checked against the `document` schema; a document
/// that fails the schema is not checked further. Warnings never make a
/// report invalid.
pub fn check(
    path: &Path,
    rules: &ValidationRules,
    registry: &SchemaRegistry,
) -> anyhow::Result<ValidationReport> {
    let format = DocumentFormat::from_path(path);
    let text = read_text(path)?;

    let mut schema_errors = Vec::new();
    let document = match format {
        DocumentFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", path.display()))?;
            match registry.validate("document", &value) {
                Ok(()) => Some(
                    serde_json::from_value::<Document>(value)
                        .with_context(|| format!("failed to load {}", path.display()))?,
                ),
                Err(SchemaError::Invalid { errors, .. }) => {
                    schema_errors = errors;
                    None
                }
                Err(error) => return Err(error.into()),
            }
        }
        DocumentFormat::Xml => Some(
            parse_document(&text, format)
                .with_context(|| format!("failed to load {}", path.display()))?,
        ),
    };

    let (records, violations) = document.map_or_else(
        || (0, Vec::new()),
        |document| (document.record_count(), document.check(rules)),
    );

    let mut report = ValidationReport {
        input: path.display().to_string(),
        format,
        valid: false,
        records,
        schema_errors,
        violations,
    };
    report.valid = report.error_count() == 0;

    tracing::debug!(
        input = %path.display(),
        valid = report.valid,
        violations = report.violations.len(),
        "validated document"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn clean_document_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "ok.json",
            r#"{ "places": [{ "names": [{ "value": "Boston" }], "latitude": 42.0, "longitude": -71.0 }] }"#,
        );

        let report = check(&path, &ValidationRules::default(), &SchemaRegistry::new()).unwrap();
        assert!(report.valid);
        assert_eq!(report.records, 1);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn schema_failure_skips_semantic_checks() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.json", r#"{ "places": [{ "latitude": "north" }] }"#);

        let report = check(&path, &ValidationRules::default(), &SchemaRegistry::new()).unwrap();
        assert!(!report.valid);
        assert!(!report.schema_errors.is_empty());
        assert!(report.violations.is_empty());
    }

    #[test]
    fn strict_rules_flag_out_of_range_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "far.xml",
            r#"<gedcomx xmlns="http://gedcomx.org/v1/">
                 <place><name>Nowhere</name><latitude>95</latitude><longitude>10</longitude></place>
               </gedcomx>"#,
        );
        let registry = SchemaRegistry::new();

        let lenient = check(&path, &ValidationRules::default(), &registry).unwrap();
        assert!(lenient.valid);

        let strict = ValidationRules {
            strict_coordinates: true,
            ..ValidationRules::default()
        };
        let report = check(&path, &strict, &registry).unwrap();
        assert!(!report.valid);
        assert_eq!(report.format, DocumentFormat::Xml);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].field, "latitude");
    }

    #[test]
    fn warnings_alone_keep_document_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "warn.json", r#"{ "changes": [{}] }"#);

        let report = check(&path, &ValidationRules::default(), &SchemaRegistry::new()).unwrap();
        assert!(report.valid);
        assert_eq!(report.violations.len(), 2);
        assert!(
            report
                .violations
                .iter()
                .all(|violation| violation.severity == Severity::Warning)
        );
    }

    #[test]
    fn handle_fails_on_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "unnamed.json", r#"{ "places": [{ "id": "P-1" }] }"#);
        let flags = GlobalFlags {
            format: crate::cli::OutputFormat::Raw,
            quiet: true,
            verbose: false,
        };

        let err = handle(&ValidateArgs { input: path }, &GedxConfig::default(), &flags).unwrap_err();
        assert!(err.to_string().contains("failed validation with 1 error(s)"));
    }
}
