//! Diff generation for audit logging

use serde_json::Value;

/// Generate a one-line summary of top-level field changes
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let changes: Vec<String> = before_obj
                .iter()
                .filter_map(|(key, before_val)| match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => Some(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => None,
                    None => Some(format!("{}: {} -> (removed)", key, format_value(before_val))),
                })
                .chain(
                    after_obj
                        .iter()
                        .filter(|(key, _)| !before_obj.contains_key(*key))
                        .map(|(key, v)| format!("{}: (added) -> {}", key, format_value(v))),
                )
                .collect();

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let v = json!({"date": "2024-01-01"});
        assert_eq!(generate_diff(&v, &v), None);
    }

    #[test]
    fn test_field_changes() {
        let before = json!({"type": "income", "category": "salary"});
        let after = json!({"type": "expense", "category": "salary"});
        assert_eq!(
            generate_diff(&before, &after).as_deref(),
            Some("type: \"income\" -> \"expense\"")
        );
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)).as_deref(),
            Some("1 -> 2")
        );
    }
}
