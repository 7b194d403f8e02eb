//! Schema-free JSON value handling.
//!
//! # Data Flow
//! ```text
//! JSON text (rule/selector parameters, no fixed schema)
//!     → decoder.rs (parse & classify)
//!     → DynamicValue graph (tagged union, insertion-order mappings)
//!     → consumed generically by rule handling, or
//!     → query.rs (flat string object → URL query string)
//! ```
//!
//! # Design Decisions
//! - Numeric subtype is inferred from the lexical form of the source text:
//!   a number with `.` or an exponent is a Float, otherwise an Integer
//! - Mappings preserve the order keys first appear in the source document
//! - Decoding is all-or-nothing; malformed input never yields a partial graph
//! - Accessors fail with an explicit type mismatch instead of coercing

pub mod decoder;
pub mod query;
pub mod value;

use thiserror::Error;

pub use decoder::decode_list;
pub use decoder::decode_object;
pub use decoder::decode_value;
pub use decoder::encode_to_text;
pub use query::to_query_string;
pub use value::DynamicValue;

/// Errors produced while decoding or interpreting dynamic values.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input text is not well-formed JSON.
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A value had a different shape than the operation requires.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type for dynamic value operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
