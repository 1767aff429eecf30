//! Fixed example-JSON prompt shown before any data is supplied

const INPUT_TEMPLATE: &str = r#"Here is the template:

JSON Format Example:
```json
{
  "resources": [
    {
      "resource_id": "[String]",
      "current_load": [Integer],
      "max_capacity": [Integer],
      "real_time_usage": [Integer]
    }
  ]
}
```

Please provide your server resource data in JSON format to begin the optimization analysis."#;

/// The JSON template for data input
pub fn input_template() -> &'static str {
    INPUT_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_names_every_required_field() {
        let template = input_template();
        for field in crate::validator::REQUIRED_FIELDS {
            assert!(template.contains(field), "template should mention {field}");
        }
    }
}
