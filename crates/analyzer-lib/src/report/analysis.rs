//! Per-resource detailed analysis block

use crate::models::ResourceMetrics;

/// Render the full analysis block for one resource
pub fn resource_analysis(metrics: &ResourceMetrics) -> String {
    format!(
        "## Resource {id}
### Input Data:
- Current Load: {load}%
- Maximum Capacity: {capacity}%
- Real-time Usage: {usage}%

### Detailed Calculations:
{available}

{utilization}

{scaling}

{allocation}

### Final Recommendation:
{recommendation}",
        id = metrics.resource_id,
        load = metrics.current_load,
        capacity = metrics.max_capacity,
        usage = metrics.real_time_usage,
        available = available_capacity_step(metrics),
        utilization = utilization_ratio_step(metrics),
        scaling = scaling_check_step(metrics),
        allocation = allocation_adjustment_step(metrics),
        recommendation = final_recommendation(metrics),
    )
}

/// Step 1: available capacity, formula plus substituted computation
fn available_capacity_step(metrics: &ResourceMetrics) -> String {
    format!(
        r#"1. **Available Capacity Calculation:**
   - Formula:
     $$
     \text{{Available Capacity}} = \text{{max_capacity}} - \text{{current_load}}
     $$
   - Calculation:
     $$
     {capacity} - {load} = {available}\ \%
     $$
   - Explanation: Subtracting the current load from the maximum capacity gives the capacity still available on the resource.
   - System Response: "The available capacity is {available}%.""#,
        capacity = metrics.max_capacity,
        load = metrics.current_load,
        available = metrics.available_capacity,
    )
}

/// Step 2: utilization ratio, formula plus substituted computation
fn utilization_ratio_step(metrics: &ResourceMetrics) -> String {
    format!(
        r#"2. **Resource Utilization Ratio:**
   - Formula:
     $$ \text{{Utilization Ratio (\%)}} = \left(\frac{{\text{{current_load}}}}{{\text{{max_capacity}}}}\right) \times 100 $$
   - Calculation:
     $$ \left(\frac{{{load}}}{{{capacity}}}\right) \times 100 = {ratio}\% $$
   - Explanation: A utilization ratio close to 100% signals that the resource is nearly maxed out and could benefit from scaling.
   - System Response: "The Utilization Ratio is {ratio}%.""#,
        load = metrics.current_load,
        capacity = metrics.max_capacity,
        ratio = metrics.utilization_ratio,
    )
}

/// Step 3: the two scaling conditions plus the combined decision
fn scaling_check_step(metrics: &ResourceMetrics) -> String {
    format!(
        r#"3. **Scaling Requirement Check:**
   - Condition 1: IF real_time_usage > current_load, THEN scaling up is required.
     Detailed Explanation: "{demand}"
   - Condition 2: IF available_capacity < 20, THEN scaling up is required.
     Detailed Explanation: "{capacity}"
   - System Response: {decision}"#,
        demand = demand_explanation(metrics),
        capacity = capacity_explanation(metrics),
        decision = scaling_decision(metrics),
    )
}

/// Step 4: additional-capacity computation, or "not applicable"
fn allocation_adjustment_step(metrics: &ResourceMetrics) -> String {
    let (calculation, response) = match metrics.additional_capacity_needed {
        Some(needed) => (
            format!("$$\n     100 - {} = {}\n     $$", metrics.current_load, needed),
            format!("The additional capacity needed is {needed}%."),
        ),
        None => (
            "Not applicable as scaling is not required.".to_string(),
            "Current resource allocation is optimal; no additional capacity is needed."
                .to_string(),
        ),
    };

    format!(
        r#"4. **Optimal Allocation Adjustment:**
   - If scaling up is required, THEN calculate:
     $$
     \text{{Additional Capacity Needed}} = 100 - \text{{current_load}}
     $$
   - Calculation:
     {calculation}
   - Explanation: This step derives the additional capacity needed to reach full (100%) utilization.
   - System Response: "{response}""#
    )
}

fn demand_explanation(metrics: &ResourceMetrics) -> String {
    if metrics.demand_increasing {
        format!(
            "The real-time usage {} exceeds the current load {}, indicating that the demand on the resource is increasing.",
            metrics.real_time_usage, metrics.current_load
        )
    } else {
        format!(
            "The real-time usage {} does not exceed the current load {}, indicating that the demand on the resource is stable.",
            metrics.real_time_usage, metrics.current_load
        )
    }
}

fn capacity_explanation(metrics: &ResourceMetrics) -> &'static str {
    if metrics.scaling_required {
        "Since the available capacity is below the explicit threshold of 20%, scaling up is required to handle increased demand."
    } else {
        "Available capacity is above the threshold of 20%, indicating sufficient resource allocation."
    }
}

/// Combined decision: dual trigger, single trigger (naming the trigger), or
/// sufficient allocation
fn scaling_decision(metrics: &ResourceMetrics) -> &'static str {
    match (metrics.demand_increasing, metrics.scaling_required) {
        (true, true) => {
            "Real-time usage exceeds current load, and available capacity is below 20%. Scaling up is required."
        }
        (true, false) => {
            "Real-time usage exceeds current load, indicating increased demand. Scaling up may be needed."
        }
        (false, true) => "Available capacity is below 20%. Scaling up is required to handle demand.",
        (false, false) => "Resource allocation is currently sufficient.",
    }
}

/// One or both triggers produce the same recommendation wording
fn final_recommendation(metrics: &ResourceMetrics) -> String {
    if metrics.demand_increasing || metrics.scaling_required {
        format!(
            "Scaling up is recommended for {} to achieve optimal load balance.",
            metrics.resource_id
        )
    } else {
        format!(
            "No scaling is required for {}; resource allocation is optimal.",
            metrics.resource_id
        )
    }
}
