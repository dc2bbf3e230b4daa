use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

/// Format items as JSON under `field`, stamped with the current time
pub fn format_json<T: Serialize>(field: &str, items: &[T]) -> String {
    let items = match serde_json::to_value(items) {
        Ok(value) => value,
        Err(e) => return format!("{{\"error\": \"Failed to serialize: {}\"}}", e),
    };

    let mut output = Map::new();
    output.insert("timestamp".to_string(), Value::String(Utc::now().to_rfc3339()));
    output.insert(field.to_string(), items);

    match serde_json::to_string_pretty(&Value::Object(output)) {
        Ok(json) => json,
        Err(e) => format!("{{\"error\": \"Failed to serialize: {}\"}}", e),
    }
}
