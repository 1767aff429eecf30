//! Built-in demonstration dataset
//!
//! Lives in the driver only; the core library always takes its record set
//! as an explicit parameter.

use serde_json::{json, Value};

/// Eight sample servers mixing scaling and no-scaling cases
pub fn sample_document() -> Value {
    json!({
        "resources": [
            {"resource_id": "server1", "current_load": 65, "max_capacity": 80, "real_time_usage": 70},
            {"resource_id": "server2", "current_load": 50, "max_capacity": 70, "real_time_usage": 55},
            {"resource_id": "server3", "current_load": 75, "max_capacity": 90, "real_time_usage": 80},
            {"resource_id": "server4", "current_load": 45, "max_capacity": 65, "real_time_usage": 50},
            {"resource_id": "server5", "current_load": 80, "max_capacity": 95, "real_time_usage": 85},
            {"resource_id": "server6", "current_load": 60, "max_capacity": 80, "real_time_usage": 65},
            {"resource_id": "server7", "current_load": 55, "max_capacity": 75, "real_time_usage": 60},
            {"resource_id": "server8", "current_load": 40, "max_capacity": 60, "real_time_usage": 45},
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_lib::validate;

    #[test]
    fn test_sample_document_validates() {
        assert!(validate(&sample_document()).is_valid());
    }
}
