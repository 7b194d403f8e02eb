//! Pluggable payload codecs.
//!
//! # Design Decisions
//! - Codecs translate between wire bytes and `serde_json::Value` as the
//!   neutral interchange shape, which keeps the trait object-safe while the
//!   registry layer stays generic over entity types
//! - A codec is selected by configuration name; only the JSON codec ships,
//!   the seam exists for deployments that register others

use std::sync::Arc;

use thiserror::Error;

/// Errors produced by payload codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("payload encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("payload decode failed: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("payload is not valid UTF-8")]
    NotUtf8,
}

/// A named byte serializer for tree payloads.
pub trait PayloadCodec: Send + Sync {
    /// Configuration name this codec is selected by.
    fn name(&self) -> &'static str;

    fn encode(&self, value: &serde_json::Value) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<serde_json::Value, CodecError>;
}

/// The default codec: UTF-8 JSON text.
#[derive(Debug, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, value: &serde_json::Value) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }

    fn decode(&self, bytes: &[u8]) -> Result<serde_json::Value, CodecError> {
        let text = std::str::from_utf8(bytes).map_err(|_| CodecError::NotUtf8)?;
        serde_json::from_str(text).map_err(CodecError::Decode)
    }
}

/// Resolve a codec by its configuration name.
pub fn codec_for(name: &str) -> Option<Arc<dyn PayloadCodec>> {
    match name {
        "json" => Some(Arc::new(JsonCodec)),
        _ => None,
    }
}
