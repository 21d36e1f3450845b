//! String forms of cell values used for matching.

use serde_json::{Number, Value};

/// Render a cell value the way matching sees it.
///
/// Null cells are empty, numbers use their decimal form (`2.0` is `"2"`),
/// arrays join their elements with commas and objects fall back to compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_primitives() {
        assert_eq!(cell_text(&json!("Hello")), "Hello");
        assert_eq!(cell_text(&json!(22)), "22");
        assert_eq!(cell_text(&json!(-7)), "-7");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&Value::Null), "");
    }

    #[test]
    fn test_cell_text_floats() {
        assert_eq!(cell_text(&json!(2.0)), "2");
        assert_eq!(cell_text(&json!(2.5)), "2.5");
        assert_eq!(cell_text(&json!(0.1)), "0.1");
    }

    #[test]
    fn test_cell_text_compound() {
        assert_eq!(cell_text(&json!([1, "a", null])), "1,a,");
        assert_eq!(cell_text(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
