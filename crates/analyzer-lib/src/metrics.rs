//! Per-resource utilization and scaling metric derivation

use crate::models::{ResourceMetrics, ResourceRecord};

/// Available-capacity percentage below which scaling is required
pub const SCALING_THRESHOLD_PERCENT: f64 = 20.0;

/// Target utilization the additional-capacity figure is measured against
const FULL_LOAD_PERCENT: f64 = 100.0;

/// Round to 2 decimal places, ties to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Derive utilization and scaling metrics for one validated record
///
/// Pure function with no failure path. The record must have passed the
/// schema validator; calling this with a zero or non-finite `max_capacity`
/// is a contract breach and panics rather than producing silent garbage.
pub fn compute(record: &ResourceRecord) -> ResourceMetrics {
    assert!(
        record.max_capacity != 0.0
            && record.max_capacity.is_finite()
            && record.current_load.is_finite()
            && record.real_time_usage.is_finite(),
        "metrics requested for an unvalidated record {:?}; run the schema validator first",
        record.resource_id
    );

    let available_capacity = round2(record.max_capacity - record.current_load);
    let utilization_ratio = round2((record.current_load / record.max_capacity) * 100.0);

    let demand_increasing = record.real_time_usage > record.current_load;
    let scaling_required = available_capacity < SCALING_THRESHOLD_PERCENT;

    let additional_capacity_needed =
        scaling_required.then(|| round2(FULL_LOAD_PERCENT - record.current_load));

    ResourceMetrics {
        resource_id: record.resource_id.clone(),
        current_load: record.current_load,
        max_capacity: record.max_capacity,
        real_time_usage: record.real_time_usage,
        available_capacity,
        utilization_ratio,
        demand_increasing,
        scaling_required,
        additional_capacity_needed,
    }
}
