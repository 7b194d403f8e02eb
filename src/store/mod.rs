//! Coordination-store seam.
//!
//! # Data Flow
//! ```text
//! registry publisher
//!     → ConfigStore::write(path, bytes)
//!     → backing tree (in-memory here; ZooKeeper-like in production)
//!     → ChangeEvent broadcast to watchers
//! ```
//!
//! # Design Decisions
//! - The trait carries only what the configuration core consumes: point
//!   reads/writes, child listing, and a change-event stream
//! - Connection lifecycle, sessions, and retry policy belong to the
//!   backing client, not this seam
//! - Watch is a broadcast stream; a slow watcher lags and misses events
//!   rather than blocking writers

pub mod memory;

use thiserror::Error;
use tokio::sync::broadcast;

pub use memory::MemoryStore;

/// Errors surfaced by a configuration store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// What happened to a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Removed,
}

/// One observed mutation of the tree.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub path: String,
    pub kind: ChangeKind,
    /// Payload after the change; `None` for removals.
    pub data: Option<Vec<u8>>,
}

/// A hierarchical, watchable key-value store for configuration payloads.
pub trait ConfigStore: Send + Sync {
    /// Read the payload at a path, `None` when the node is absent.
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Create or replace the payload at a path.
    fn write(&self, path: &str, data: Vec<u8>) -> Result<(), StoreError>;

    /// Delete the node at a path. Deleting an absent node is not an error.
    fn remove(&self, path: &str) -> Result<(), StoreError>;

    /// Leaf names of the direct children of a parent path.
    fn children(&self, parent: &str) -> Result<Vec<String>, StoreError>;

    /// Subscribe to mutations of the whole tree.
    fn watch(&self) -> broadcast::Receiver<ChangeEvent>;
}
