//! Schema validation for server resource documents
//!
//! Checks structural and semantic well-formedness of a decoded JSON value
//! before any metrics are derived. Structural problems short-circuit; field
//! level problems are collected across the whole batch, and any diagnostic
//! anywhere rejects the entire batch.

use serde_json::Value;
use thiserror::Error;

use crate::models::ResourceRecord;

/// Fields every record must carry
pub const REQUIRED_FIELDS: [&str; 4] = [
    "resource_id",
    "current_load",
    "max_capacity",
    "real_time_usage",
];

/// Fields that must hold a numeric value in `(0, 100]`
pub const NUMERIC_FIELDS: [&str; 3] = ["current_load", "max_capacity", "real_time_usage"];

/// One validation diagnostic
///
/// Record indices in the rendered text are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("Missing 'resources' array in the JSON input.")]
    MissingResources,

    #[error("'resources' must be an array.")]
    ResourcesNotArray,

    #[error("'resources' array cannot be empty.")]
    EmptyResources,

    #[error("Missing required field(s): {} in record {record}.", .fields.join(", "))]
    MissingFields { record: usize, fields: Vec<String> },

    #[error(
        "Invalid data type for the field(s): {} in record {record}. Please ensure numeric values.",
        .fields.join(", ")
    )]
    InvalidFieldTypes { record: usize, fields: Vec<String> },

    #[error(
        "Invalid value for the field(s): {} in record {record}. Please make sure that all data falls within the range of 1 to 100.",
        .fields.join(", ")
    )]
    ValuesOutOfRange { record: usize, fields: Vec<String> },
}

impl Diagnostic {
    /// Render the diagnostic as a user-facing line
    pub fn line(&self) -> String {
        format!("ERROR: {self}")
    }
}

/// Outcome of validating one input document
///
/// Exactly one side is ever populated: a non-empty diagnostic list on
/// failure, or the full accepted record sequence (input order preserved)
/// on success.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(Vec<ResourceRecord>),
    Invalid(Vec<Diagnostic>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Validate an arbitrary decoded JSON value against the resource document
/// schema
///
/// Pure function: no side effects, total over all inputs.
pub fn validate(document: &Value) -> ValidationResult {
    let Some(resources) = document.get("resources") else {
        return ValidationResult::Invalid(vec![Diagnostic::MissingResources]);
    };

    let Some(items) = resources.as_array() else {
        return ValidationResult::Invalid(vec![Diagnostic::ResourcesNotArray]);
    };

    if items.is_empty() {
        return ValidationResult::Invalid(vec![Diagnostic::EmptyResources]);
    }

    let mut diagnostics = Vec::new();
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let record = index + 1;

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| item.get(**field).is_none())
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            diagnostics.push(Diagnostic::MissingFields {
                record,
                fields: missing,
            });
        }

        let non_numeric: Vec<String> = NUMERIC_FIELDS
            .iter()
            .filter(|field| matches!(item.get(**field), Some(value) if value.as_f64().is_none()))
            .map(|field| field.to_string())
            .collect();
        if !non_numeric.is_empty() {
            diagnostics.push(Diagnostic::InvalidFieldTypes {
                record,
                fields: non_numeric,
            });
        }

        let out_of_range: Vec<String> = NUMERIC_FIELDS
            .iter()
            .filter(|field| {
                matches!(
                    item.get(**field).and_then(Value::as_f64),
                    Some(value) if value <= 0.0 || value > 100.0
                )
            })
            .map(|field| field.to_string())
            .collect();
        if !out_of_range.is_empty() {
            diagnostics.push(Diagnostic::ValuesOutOfRange {
                record,
                fields: out_of_range,
            });
        }

        if let Some(parsed) = parse_record(item) {
            records.push(parsed);
        }
    }

    // One bad record rejects the whole batch
    if diagnostics.is_empty() {
        ValidationResult::Valid(records)
    } else {
        ValidationResult::Invalid(diagnostics)
    }
}

/// Build a typed record from a JSON object that passed every check
///
/// `resource_id` is not constrained to a string, so any scalar identifier
/// is stringified rather than rejected.
fn parse_record(item: &Value) -> Option<ResourceRecord> {
    let resource_id = match item.get("resource_id")? {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    };

    let numeric = |field: &str| -> Option<f64> {
        let value = item.get(field)?.as_f64()?;
        (value > 0.0 && value <= 100.0).then_some(value)
    };

    Some(ResourceRecord {
        resource_id,
        current_load: numeric("current_load")?,
        max_capacity: numeric("max_capacity")?,
        real_time_usage: numeric("real_time_usage")?,
    })
}
