//! The tagged union over schema-free JSON values.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dynamic::{DecodeError, DecodeResult};

/// A runtime-tagged JSON value.
///
/// Mappings are kept as ordered entry lists so key order matches the order
/// keys first appear in the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<DynamicValue>),
    Mapping(Vec<(String, DynamicValue)>),
}

impl DynamicValue {
    /// Name of the variant, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    fn mismatch(&self, expected: &'static str) -> DecodeError {
        DecodeError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> DecodeResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_i64(&self) -> DecodeResult<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            other => Err(other.mismatch("integer")),
        }
    }

    pub fn as_f64(&self) -> DecodeResult<f64> {
        match self {
            Self::Float(f) => Ok(*f),
            other => Err(other.mismatch("float")),
        }
    }

    pub fn as_bool(&self) -> DecodeResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn as_sequence(&self) -> DecodeResult<&[DynamicValue]> {
        match self {
            Self::Sequence(items) => Ok(items),
            other => Err(other.mismatch("sequence")),
        }
    }

    pub fn as_mapping(&self) -> DecodeResult<&[(String, DynamicValue)]> {
        match self {
            Self::Mapping(entries) => Ok(entries),
            other => Err(other.mismatch("mapping")),
        }
    }

    /// Look up a key in a mapping. `None` for a missing key or any
    /// non-mapping variant.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        match self {
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl Serialize for DynamicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct DynamicValueVisitor;

impl<'de> Visitor<'de> for DynamicValueVisitor {
    type Value = DynamicValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DynamicValue::Boolean(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DynamicValue::Integer(v))
    }

    // serde_json routes numbers here by lexical form: only digits without
    // `.` or an exponent arrive as u64/i64, everything else as f64. That is
    // exactly the integer/float classification rule this type needs.
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match i64::try_from(v) {
            Ok(i) => Ok(DynamicValue::Integer(i)),
            Err(_) => Ok(DynamicValue::Float(v as f64)),
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DynamicValue::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DynamicValue::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DynamicValue::String(v))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DynamicValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DynamicValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        DynamicValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(DynamicValue::Sequence(items))
    }

    // Entries are pushed in the order the deserializer yields them, which
    // for JSON text is source order.
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, DynamicValue>()? {
            entries.push((key, value));
        }
        Ok(DynamicValue::Mapping(entries))
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DynamicValueVisitor)
    }
}
