use serde_json::Value;

use cs_core::{Extension, NormalizeError, NormalizeInput, Normalized, Rejection};

use super::json_layout::JsonLayout;

/// Accept any JSON document whose top-level value is not empty or falsy and
/// re-serialize it canonically.
pub(super) fn normalize(input: &NormalizeInput<'_>) -> Result<Normalized, NormalizeError> {
    let text = input.text()?;
    let value: Value =
        serde_json::from_str(text).map_err(|e| Rejection::InvalidJson(e.to_string()))?;

    if is_falsy(&value) {
        return Err(Rejection::EmptyJson.into());
    }

    let formatted = JsonLayout::default().format(&value);
    Ok(Normalized::new(formatted.into_bytes(), Extension::json()))
}

/// `null`, `false`, zero, `""`, `[]` and `{}`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Result<Normalized, NormalizeError> {
        normalize(&NormalizeInput::Text(text))
    }

    #[test]
    fn test_small_object_is_pretty_printed() {
        let out = run(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
        assert_eq!(out.extension, Extension::json());
        assert_eq!(
            String::from_utf8(out.content).unwrap(),
            r#"{ "a": 1, "b": [1, 2, 3] }"#
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let input = r#"{"name":"clip","tags":["x","y"],"nested":{"deep":{"deeper":[1,{"k":null}]}},"long":"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"}"#;
        let first = run(input).unwrap().content;
        let second = run(std::str::from_utf8(&first).unwrap()).unwrap().content;
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let out = run(r#"{"z":1,"a":2}"#).unwrap();
        assert_eq!(String::from_utf8(out.content).unwrap(), r#"{"z": 1, "a": 2}"#);
    }

    #[test]
    fn test_falsy_values_are_rejected() {
        for text in ["{}", "[]", "\"\"", "0", "0.0", "-0", "false", "null"] {
            assert!(
                matches!(run(text), Err(NormalizeError::Rejected(Rejection::EmptyJson))),
                "{text} should be rejected as empty"
            );
        }
    }

    #[test]
    fn test_truthy_scalars_are_accepted() {
        for (text, expected) in [
            ("42", "42"),
            ("12345678901", "12345678901"),
            ("  \"text\"\n", "\"text\""),
            ("true", "true"),
            ("-1.5", "-1.5"),
        ] {
            let out = run(text).unwrap();
            assert_eq!(out.extension, Extension::json());
            assert_eq!(String::from_utf8(out.content).unwrap(), expected);
        }
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            run("hello world, no keywords here"),
            Err(NormalizeError::Rejected(Rejection::InvalidJson(_)))
        ));
        assert!(matches!(
            run(""),
            Err(NormalizeError::Rejected(Rejection::InvalidJson(_)))
        ));
    }
}
