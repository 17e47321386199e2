//! Argument checking against a tool's declared input schema.
//!
//! Only the subset of JSON Schema the tool catalog uses is understood:
//! `required` plus a `type` (string or list of strings) per property.
//! Every failure is collected so the caller sees all of them at once.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::FieldError;

pub fn validate(schema: &JsonObject, args: &JsonObject) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        .unwrap_or_default();

    for field in &required {
        match args.get(*field) {
            None | Some(Value::Null) => errors.push(FieldError::missing(*field)),
            Some(_) => {}
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (field, property) in properties {
            let Some(value) = args.get(field) else {
                continue;
            };
            if value.is_null() && required.contains(&field.as_str()) {
                // already reported as missing
                continue;
            }
            let allowed = allowed_types(property);
            if !allowed.is_empty() && !allowed.iter().any(|t| matches_type(t, value)) {
                errors.push(FieldError::new(
                    field.as_str(),
                    format!("expected {}, got {}", allowed.join(" or "), type_name(value)),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn allowed_types(property: &Value) -> Vec<&str> {
    match property.get("type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn matches_type(expected: &str, value: &Value) -> bool {
    match expected {
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
