//! Compact-but-readable JSON layout.
//!
//! - 2-space indentation, `\n` line endings, no trailing newline
//! - a container is written on one line when its complexity is at most
//!   `max_inline_complexity` and the line fits in `max_line_length`
//! - arrays of scalars that don't fit are packed several items per line
//! - everything else expands one child per line
//!
//! Complexity: scalars and empty containers are 0, a container is one more
//! than its most complex child. Inline containers holding non-empty containers
//! get one space of padding inside their brackets.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy)]
pub struct JsonLayout {
    pub indent: usize,
    pub max_inline_complexity: usize,
    pub max_line_length: usize,
}

impl Default for JsonLayout {
    fn default() -> Self {
        Self {
            indent: 2,
            max_inline_complexity: 10,
            max_line_length: 120,
        }
    }
}

impl JsonLayout {
    pub fn format(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0, 0);
        out
    }

    /// `column` is where `value` starts on the current line.
    fn write_value(&self, out: &mut String, value: &Value, depth: usize, column: usize) {
        if let Some(inline) = self.try_inline(value, column) {
            out.push_str(&inline);
            return;
        }
        match value {
            Value::Array(items) if items.iter().all(is_atom) => {
                self.write_packed_array(out, items, depth)
            }
            Value::Array(items) => self.write_expanded_array(out, items, depth),
            Value::Object(map) => self.write_expanded_object(out, map, depth),
            scalar => out.push_str(&scalar.to_string()),
        }
    }

    fn try_inline(&self, value: &Value, column: usize) -> Option<String> {
        if is_atom(value) {
            return Some(inline(value));
        }
        if complexity(value) > self.max_inline_complexity {
            return None;
        }
        let text = inline(value);
        // One column is reserved for a trailing comma.
        (column + text.chars().count() < self.max_line_length).then_some(text)
    }

    fn write_packed_array(&self, out: &mut String, items: &[Value], depth: usize) {
        let inner = self.pad(depth + 1);
        let mut lines: Vec<String> = Vec::new();
        let mut line = String::new();
        for item in items {
            let text = inline(item);
            let candidate_len = inner.len() + line.chars().count() + 2 + text.chars().count() + 1;
            if !line.is_empty() && candidate_len > self.max_line_length {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(&text);
        }
        if !line.is_empty() {
            lines.push(line);
        }

        out.push_str("[\n");
        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            out.push_str(&inner);
            out.push_str(line);
            if i != last {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str(&self.pad(depth));
        out.push(']');
    }

    fn write_expanded_array(&self, out: &mut String, items: &[Value], depth: usize) {
        let inner = self.pad(depth + 1);
        out.push_str("[\n");
        for (i, item) in items.iter().enumerate() {
            out.push_str(&inner);
            self.write_value(out, item, depth + 1, inner.len());
            if i + 1 != items.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str(&self.pad(depth));
        out.push(']');
    }

    fn write_expanded_object(&self, out: &mut String, map: &Map<String, Value>, depth: usize) {
        let inner = self.pad(depth + 1);
        out.push_str("{\n");
        for (i, (key, value)) in map.iter().enumerate() {
            let key = quote(key);
            out.push_str(&inner);
            out.push_str(&key);
            out.push_str(": ");
            let column = inner.len() + key.chars().count() + 2;
            self.write_value(out, value, depth + 1, column);
            if i + 1 != map.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str(&self.pad(depth));
        out.push('}');
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }
}

/// Scalar or empty container.
fn is_atom(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => true,
    }
}

fn complexity(value: &Value) -> usize {
    match value {
        Value::Array(items) if !items.is_empty() => {
            1 + items.iter().map(complexity).max().unwrap_or(0)
        }
        Value::Object(map) if !map.is_empty() => {
            1 + map.values().map(complexity).max().unwrap_or(0)
        }
        _ => 0,
    }
}

fn quote(key: &str) -> String {
    Value::from(key).to_string()
}

fn inline(value: &Value) -> String {
    let padding = if complexity(value) >= 2 { " " } else { "" };
    match value {
        Value::Array(items) if !items.is_empty() => {
            let body: Vec<String> = items.iter().map(inline).collect();
            format!("[{padding}{}{padding}]", body.join(", "))
        }
        Value::Object(map) if !map.is_empty() => {
            let body: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), inline(v)))
                .collect();
            format!("{{{padding}{}{padding}}}", body.join(", "))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_and_empty_containers() {
        let layout = JsonLayout::default();
        assert_eq!(layout.format(&json!(1.5)), "1.5");
        assert_eq!(layout.format(&json!("a\"b")), r#""a\"b""#);
        assert_eq!(layout.format(&json!([])), "[]");
        assert_eq!(layout.format(&json!({})), "{}");
    }

    #[test]
    fn test_nested_padding_only_around_nested_containers() {
        let layout = JsonLayout::default();
        assert_eq!(layout.format(&json!([1, 2])), "[1, 2]");
        assert_eq!(layout.format(&json!([[1], []])), "[ [1], [] ]");
        assert_eq!(layout.format(&json!({"a": {}})), r#"{"a": {}}"#);
    }

    #[test]
    fn test_complexity_threshold_forces_expansion() {
        let layout = JsonLayout {
            max_inline_complexity: 1,
            ..JsonLayout::default()
        };
        assert_eq!(
            layout.format(&json!({"a": [1, 2], "b": 3})),
            "{\n  \"a\": [1, 2],\n  \"b\": 3\n}"
        );
    }

    #[test]
    fn test_long_scalar_array_is_packed() {
        let layout = JsonLayout {
            max_line_length: 20,
            ..JsonLayout::default()
        };
        let formatted = layout.format(&json!([100, 200, 300, 400, 500, 600, 700]));
        assert_eq!(formatted, "[\n  100, 200, 300,\n  400, 500, 600,\n  700\n]");
        for line in formatted.lines() {
            assert!(line.len() <= 20, "{line:?} exceeds limit");
        }
    }

    #[test]
    fn test_long_object_expands_with_lf_only() {
        let long = "x".repeat(130);
        let formatted = JsonLayout::default().format(&json!({"k": long, "n": [1, {"m": 2}]}));
        assert!(!formatted.contains('\r'));
        assert!(!formatted.ends_with('\n'));
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines[0], "{");
        assert!(lines[1].starts_with("  \"k\": \"xxx"));
        assert_eq!(lines[2], "  \"n\": [ 1, {\"m\": 2} ]");
        assert_eq!(lines[3], "}");
    }
}
