//! Validation -> metrics -> report pipeline
//!
//! Pure batch transform: one decoded JSON document in, one report string
//! (or the full diagnostic list) out. No I/O, no shared state across
//! invocations.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::report;
use crate::validator::{self, Diagnostic, ValidationResult};

/// Input document rejected by the schema validator
#[derive(Debug, Clone, PartialEq, Error)]
#[error("input document rejected with {} diagnostic(s)", .diagnostics.len())]
pub struct AnalysisRejected {
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisRejected {
    /// Diagnostics rendered as `ERROR:`-prefixed lines, in detection order
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(Diagnostic::line).collect()
    }
}

/// Run the full analysis pipeline over one decoded document
///
/// All validator-detected problems surface here as a single diagnostic
/// list; nothing user-facing ever panics past this boundary.
pub fn analyze(document: &Value) -> Result<String, AnalysisRejected> {
    match validator::validate(document) {
        ValidationResult::Valid(records) => {
            debug!(records = records.len(), "document accepted, synthesizing report");
            Ok(report::synthesize(&records))
        }
        ValidationResult::Invalid(diagnostics) => {
            warn!(diagnostics = diagnostics.len(), "document rejected by validator");
            Err(AnalysisRejected { diagnostics })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document_produces_report() {
        let document = json!({"resources": [
            {"resource_id": "s1", "current_load": 65, "max_capacity": 80, "real_time_usage": 70},
        ]});

        let report = analyze(&document).unwrap();
        assert!(report.starts_with("# Data Validation Report"));
        assert!(report.contains("Scaling up is recommended for s1"));
    }

    #[test]
    fn test_rejected_document_surfaces_all_diagnostics() {
        let document = json!({"resources": [
            {"resource_id": "s1", "current_load": 150, "max_capacity": 80, "real_time_usage": 70},
            {"resource_id": "s2", "current_load": "low", "max_capacity": 80, "real_time_usage": 70},
        ]});

        let rejected = analyze(&document).unwrap_err();
        let lines = rejected.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.starts_with("ERROR: ")));
    }

    #[test]
    fn test_missing_resources_yields_single_diagnostic() {
        let rejected = analyze(&json!({})).unwrap_err();
        assert_eq!(
            rejected.lines(),
            vec!["ERROR: Missing 'resources' array in the JSON input."]
        );
    }
}
