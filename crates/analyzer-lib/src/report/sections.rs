//! Static and summary-level report sections

use crate::models::ResourceRecord;

/// Governing formulas, independent of any record's data
pub const FORMULA_REFERENCE: &str = r"# Calculation Formulas:
1. Available Capacity:
$$
\text{Available Capacity} = \text{max_capacity} - \text{current_load}
$$
2. Additional Capacity Needed (if scaling required):
$$
\text{Additional Capacity Needed} = 100 - \text{current_load}
$$";

/// Fixed closing invitation for deeper detail and a 1-5 rating
pub const CLOSING_PROMPT: &str = "# Feedback and Rating Request\nWould you like detailed calculations for any specific resource? Please rate this analysis on a scale of 1-5.";

/// Validation summary section
///
/// Assumes validation already succeeded; this section confirms it, it does
/// not re-validate.
pub fn validation_summary(records: &[ResourceRecord]) -> String {
    format!(
        "# Data Validation Report
## 1. Data Structure Check:
- Number of resources: {count}
- Number of fields per record: {fields}

## 2. Required Fields Check:
- resource_id: present
- current_load: present
- max_capacity: present
- real_time_usage: present

## 3. Data Type and Value Validation:
- current_load (positive number, \u{2264} 100): validated
- max_capacity (positive number, \u{2264} 100): validated
- real_time_usage (positive number, \u{2264} 100): validated

## Validation Summary:
Data validation is successful! Proceeding with analysis...",
        count = records.len(),
        fields = ResourceRecord::FIELD_COUNT,
    )
}

/// Header introducing the per-resource analysis blocks
pub fn analysis_header(count: usize) -> String {
    format!(
        "# Resource Allocation Analysis\nTotal Resources Evaluated: {count}\n\n# Detailed Analysis"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_summary_counts() {
        let records = vec![ResourceRecord {
            resource_id: "s1".to_string(),
            current_load: 65.0,
            max_capacity: 80.0,
            real_time_usage: 70.0,
        }];

        let section = validation_summary(&records);
        assert!(section.contains("Number of resources: 1"));
        assert!(section.contains("Number of fields per record: 4"));
        assert!(section.contains("- resource_id: present"));
        assert!(section.contains("- real_time_usage (positive number, \u{2264} 100): validated"));
    }

    #[test]
    fn test_formula_reference_names_both_formulas() {
        assert!(FORMULA_REFERENCE.contains("Available Capacity"));
        assert!(FORMULA_REFERENCE.contains("Additional Capacity Needed"));
        assert!(FORMULA_REFERENCE.contains("$$"));
    }
}
