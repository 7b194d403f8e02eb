//! Gateway configuration distribution library.
//!
//! Routing configuration for a reverse-proxy gateway (auth keys, plugins,
//! selectors, rules) lives in a hierarchical coordination-service tree and
//! carries loosely-typed JSON parameters. This crate provides the canonical
//! path scheme for that tree, a schema-free dynamic value decoder, and the
//! publish/subscribe glue between entity records and the tree.

pub mod codec;
pub mod dynamic;
pub mod entity;
pub mod paths;
pub mod registry;
pub mod store;

pub use codec::{codec_for, JsonCodec, PayloadCodec};
pub use dynamic::{DecodeError, DynamicValue};
pub use registry::{Publisher, Subscriber};
pub use store::{ChangeEvent, ChangeKind, ConfigStore, MemoryStore};
