//! Decoding JSON text into dynamic value graphs.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dynamic::{DecodeError, DecodeResult, DynamicValue};

/// Decode a JSON document of unknown shape into a single [`DynamicValue`].
pub fn decode_value(json: &str) -> DecodeResult<DynamicValue> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a top-level JSON object into its ordered entries.
///
/// Fails with a type mismatch when the document is well-formed JSON but not
/// an object.
pub fn decode_object(json: &str) -> DecodeResult<Vec<(String, DynamicValue)>> {
    match decode_value(json)? {
        DynamicValue::Mapping(entries) => Ok(entries),
        other => Err(DecodeError::TypeMismatch {
            expected: "mapping",
            found: other.kind(),
        }),
    }
}

/// Decode a JSON array whose element shape is known.
pub fn decode_list<T: DeserializeOwned>(json: &str) -> DecodeResult<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a dynamic value graph back to JSON text.
///
/// Mapping entries are written in insertion order and numeric subtype is
/// kept (Integer leaves never grow a decimal point); whitespace and other
/// lexical detail of an original input are not reproduced.
pub fn encode_to_text(value: &DynamicValue) -> DecodeResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize any serde value to JSON text.
pub fn encode<T: Serialize>(value: &T) -> DecodeResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_object() {
        assert!(decode_object("{}").unwrap().is_empty());
    }

    #[test]
    fn test_integer_vs_float_is_lexical() {
        let entries = decode_object(r#"{"a":1}"#).unwrap();
        assert_eq!(entries[0].1, DynamicValue::Integer(1));

        let entries = decode_object(r#"{"a":1.5}"#).unwrap();
        assert_eq!(entries[0].1, DynamicValue::Float(1.5));

        // An exponent marks a float even when the value is integral.
        let entries = decode_object(r#"{"a":1e3}"#).unwrap();
        assert_eq!(entries[0].1, DynamicValue::Float(1000.0));

        let entries = decode_object(r#"{"a":2.0}"#).unwrap();
        assert_eq!(entries[0].1, DynamicValue::Float(2.0));
    }

    #[test]
    fn test_nested_object_preserves_key_order() {
        let entries = decode_object(r#"{"a":{"b":true,"c":null}}"#).unwrap();
        let inner = entries[0].1.as_mapping().unwrap();
        let keys: Vec<&str> = inner.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "c"]);
        assert_eq!(inner[0].1, DynamicValue::Boolean(true));
        assert!(inner[1].1.is_null());
    }

    #[test]
    fn test_top_level_key_order() {
        let entries = decode_object(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_array_keeps_element_order() {
        let value = decode_value(r#"[1,"two",3.0,false,null]"#).unwrap();
        let items = value.as_sequence().unwrap();
        assert_eq!(items[0], DynamicValue::Integer(1));
        assert_eq!(items[1], DynamicValue::String("two".into()));
        assert_eq!(items[2], DynamicValue::Float(3.0));
        assert_eq!(items[3], DynamicValue::Boolean(false));
        assert_eq!(items[4], DynamicValue::Null);
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        for bad in ["{a:}", "{", "tru", r#"{"a":1,}"#, ""] {
            match decode_value(bad) {
                Err(DecodeError::Parse { .. }) => {}
                other => panic!("expected parse error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_decode_object_rejects_non_object() {
        match decode_object("[1,2]") {
            Err(DecodeError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, "mapping");
                assert_eq!(found, "sequence");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_list_with_known_shape() {
        let parsed: Vec<u32> = decode_list("[1,2,3]").unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);

        // Element not conforming to the shape is a parse failure.
        assert!(decode_list::<u32>(r#"[1,"x"]"#).is_err());
    }

    #[test]
    fn test_scalar_round_trip() {
        let value = DynamicValue::Mapping(vec![
            ("name".to_string(), DynamicValue::String("divide".into())),
            ("order".to_string(), DynamicValue::Integer(10)),
            ("ratio".to_string(), DynamicValue::Float(0.5)),
            ("enabled".to_string(), DynamicValue::Boolean(true)),
            ("handle".to_string(), DynamicValue::Null),
        ]);
        let text = encode_to_text(&value).unwrap();
        assert_eq!(decode_value(&text).unwrap(), value);
    }

    #[test]
    fn test_round_trip_keeps_numeric_subtype() {
        let value = DynamicValue::Mapping(vec![(
            "threshold".to_string(),
            DynamicValue::Float(1000.0),
        )]);
        let text = encode_to_text(&value).unwrap();
        // 1000.0 must not collapse to the integer lexical form.
        assert_eq!(decode_value(&text).unwrap(), value);
    }
}
