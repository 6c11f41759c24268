use serde_json::{Value, json};
use validator::ValidationErrors;

/// Request bodies are camelCase on the wire; `meal_name` is reported as `mealName`.
pub fn wire_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }

    name
}

fn describe(field: &str, error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "required" => "is required".to_string(),
            "email" => "Invalid email format".to_string(),
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            "custom" => "Custom validation failed".to_string(),
            _ => format!("Invalid {field}"),
        })
}

/// Flattens validator output into `field: message` strings, sorted by field.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = wire_field_name(&field);
            field_errors
                .iter()
                .map(move |e| format!("{field}: {}", describe(&field, e)))
        })
        .collect();

    messages.sort();
    messages
}

pub fn validation_details(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let field = wire_field_name(&field);
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        error_map.insert(field, json!(messages));
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn field_names_follow_the_json_casing() {
        assert_eq!(wire_field_name("meal_name"), "mealName");
        assert_eq!(wire_field_name("date_time"), "dateTime");
        assert_eq!(wire_field_name("email"), "email");
    }

    #[test]
    fn messages_and_details_use_wire_names() {
        let mut errors = ValidationErrors::new();
        errors.add("table_number", ValidationError::new("required"));
        errors.add("meal_name", ValidationError::new("length"));

        assert_eq!(
            validation_messages(&errors),
            vec!["mealName: Invalid length", "tableNumber: is required"]
        );

        let details = validation_details(&errors);
        assert_eq!(details["tableNumber"][0], "is required");
        assert!(details.get("table_number").is_none());
    }
}
