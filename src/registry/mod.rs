//! Publishing and reading entity records over the configuration tree.
//!
//! # Data Flow
//! ```text
//! entity record (serde)
//!     → serde_json::Value
//!     → PayloadCodec::encode
//!     → ConfigStore::write at the scheme path
//!
//! ConfigStore::read at the scheme path
//!     → PayloadCodec::decode
//!     → entity record
//! ```
//!
//! Glue only: no request routing and no condition matching happens here.

pub mod publisher;
pub mod subscriber;

use thiserror::Error;

use crate::codec::CodecError;
use crate::store::StoreError;

pub use publisher::Publisher;
pub use subscriber::Subscriber;

/// Errors surfaced while publishing or reading entity records.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
