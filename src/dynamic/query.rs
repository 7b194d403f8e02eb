//! URL query-string encoding of flat JSON objects.

use crate::dynamic::{decoder, DecodeError, DecodeResult, DynamicValue};

/// Encode a flat JSON object as a URL query string.
///
/// Entries appear in source key order, joined by `&`, with no trailing
/// separator. Blank input is an empty query string, not an error. Scalar
/// values render through their canonical text; nested structures and null
/// fail with a type mismatch instead of being stringified.
pub fn to_query_string(json: &str) -> DecodeResult<String> {
    if json.trim().is_empty() {
        return Ok(String::new());
    }

    let entries = decoder::decode_object(json)?;
    let mut parts = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let rendered = match value {
            DynamicValue::String(s) => s,
            DynamicValue::Integer(i) => i.to_string(),
            DynamicValue::Float(f) => f.to_string(),
            DynamicValue::Boolean(b) => b.to_string(),
            other => {
                return Err(DecodeError::TypeMismatch {
                    expected: "scalar",
                    found: other.kind(),
                })
            }
        };
        parts.push(format!("{}={}", key, rendered));
    }
    Ok(parts.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty_string() {
        assert_eq!(to_query_string("").unwrap(), "");
        assert_eq!(to_query_string("   ").unwrap(), "");
    }

    #[test]
    fn test_entries_in_source_order() {
        assert_eq!(
            to_query_string(r#"{"a":"1","b":"2"}"#).unwrap(),
            "a=1&b=2"
        );
        assert_eq!(
            to_query_string(r#"{"b":"2","a":"1"}"#).unwrap(),
            "b=2&a=1"
        );
    }

    #[test]
    fn test_single_entry_has_no_separator() {
        assert_eq!(to_query_string(r#"{"token":"abc"}"#).unwrap(), "token=abc");
    }

    #[test]
    fn test_scalars_render_canonically() {
        assert_eq!(
            to_query_string(r#"{"page":2,"ratio":0.5,"deep":true}"#).unwrap(),
            "page=2&ratio=0.5&deep=true"
        );
    }

    #[test]
    fn test_nested_value_is_type_mismatch() {
        match to_query_string(r#"{"a":{"b":"c"}}"#) {
            Err(DecodeError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, "scalar");
                assert_eq!(found, "mapping");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(to_query_string(r#"{"a":[1]}"#).is_err());
        assert!(to_query_string(r#"{"a":null}"#).is_err());
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        assert!(matches!(
            to_query_string("{a:}"),
            Err(DecodeError::Parse { .. })
        ));
    }
}
