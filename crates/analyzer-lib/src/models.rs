//! Core data models for the resource analyzer

use serde::{Deserialize, Serialize};

/// One server resource entry as supplied in the input document
///
/// All numeric fields are percentages in `(0, 100]`, enforced by the
/// validator before a record is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub resource_id: String,
    pub current_load: f64,
    pub max_capacity: f64,
    pub real_time_usage: f64,
}

impl ResourceRecord {
    /// Number of fields carried by a record
    pub const FIELD_COUNT: usize = 4;
}

/// Derived utilization and scaling figures for a single validated record
///
/// Immutable once computed; the input fields are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetrics {
    pub resource_id: String,
    pub current_load: f64,
    pub max_capacity: f64,
    pub real_time_usage: f64,
    /// `max_capacity - current_load`, rounded to 2 decimal places
    pub available_capacity: f64,
    /// `(current_load / max_capacity) * 100`, rounded to 2 decimal places
    pub utilization_ratio: f64,
    /// `real_time_usage > current_load`
    pub demand_increasing: bool,
    /// `available_capacity < 20`
    pub scaling_required: bool,
    /// `100 - current_load`, present only when scaling is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_capacity_needed: Option<f64>,
}
