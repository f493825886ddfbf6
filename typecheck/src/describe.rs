//! Human-readable descriptions of a value's runtime type.

use argus_core::Value;

/// Builds a string describing a value's runtime type.
///
/// With `deep` set, collection values render recursively with the ordered
/// set of distinct member descriptions, e.g. `List[Int | Str]`. Str and
/// Bytes render as atomic names. Can be slow on large collections.
pub fn describe_value(value: &Value, deep: bool) -> String {
    match value {
        Value::Map(pairs) if deep => {
            let keys = distinct(pairs.iter().map(|(key, _)| describe_value(key, deep)));
            let values = distinct(pairs.iter().map(|(_, val)| describe_value(val, deep)));
            if keys.is_empty() {
                value.type_name().to_string()
            } else {
                format!(
                    "{}[{}, {}]",
                    value.type_name(),
                    keys.join(" | "),
                    values.join(" | ")
                )
            }
        }
        Value::List(items) | Value::Tuple(items) if deep => {
            let members = distinct(items.iter().map(|item| describe_value(item, deep)));
            if members.is_empty() {
                value.type_name().to_string()
            } else {
                format!("{}[{}]", value.type_name(), members.join(" | "))
            }
        }
        _ => value.type_name().to_string(),
    }
}

/// Dedups descriptions preserving encounter order.
fn distinct(descriptions: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for description in descriptions {
        if !seen.contains(&description) {
            seen.push(description);
        }
    }
    seen
}
