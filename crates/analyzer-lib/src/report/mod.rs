//! Analysis report synthesis
//!
//! Renders the validated record set plus derived metrics into a single
//! Markdown-flavored report: validation summary, formula reference, one
//! detailed analysis block per resource, and the closing rating prompt.

mod analysis;
mod sections;

pub use analysis::resource_analysis;
pub use sections::{analysis_header, validation_summary, CLOSING_PROMPT, FORMULA_REFERENCE};

use crate::metrics;
use crate::models::ResourceRecord;

/// Render the full analysis report for a pre-validated record set
///
/// Metrics are computed once per record, in input order. Major sections are
/// separated by blank lines; per-resource blocks follow each other directly.
/// Output is byte-identical across runs for identical input.
pub fn synthesize(records: &[ResourceRecord]) -> String {
    let blocks: Vec<String> = records
        .iter()
        .map(|record| resource_analysis(&metrics::compute(record)))
        .collect();

    let analysis_section = format!("{}\n{}", analysis_header(records.len()), blocks.join("\n"));

    let sections = [
        validation_summary(records),
        FORMULA_REFERENCE.to_string(),
        analysis_section,
        CLOSING_PROMPT.to_string(),
    ];

    let mut report = sections.join("\n\n");
    report.push('\n');
    report
}
