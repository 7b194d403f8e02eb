//! In-process store implementation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use tokio::sync::broadcast;
use tracing::debug;

use crate::store::{ChangeEvent, ChangeKind, ConfigStore, StoreError};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A thread-safe in-memory configuration tree.
///
/// Backs tests and embedded single-process deployments; path semantics
/// match the hierarchical store contract, including child listing.
pub struct MemoryStore {
    nodes: RwLock<BTreeMap<String, Vec<u8>>>,
    events: broadcast::Sender<ChangeEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            nodes: RwLock::new(BTreeMap::new()),
            events,
        }
    }

    fn publish(&self, event: ChangeEvent) {
        // Send only fails when no watcher is subscribed.
        let _ = self.events.send(event);
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Backend("store lock poisoned".to_string())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let nodes = self.nodes.read().map_err(|_| Self::lock_poisoned())?;
        Ok(nodes.get(path).cloned())
    }

    fn write(&self, path: &str, data: Vec<u8>) -> Result<(), StoreError> {
        let kind = {
            let mut nodes = self.nodes.write().map_err(|_| Self::lock_poisoned())?;
            match nodes.insert(path.to_string(), data.clone()) {
                Some(_) => ChangeKind::Updated,
                None => ChangeKind::Created,
            }
        };
        debug!(path, bytes = data.len(), ?kind, "store write");
        self.publish(ChangeEvent {
            path: path.to_string(),
            kind,
            data: Some(data),
        });
        Ok(())
    }

    fn remove(&self, path: &str) -> Result<(), StoreError> {
        let existed = {
            let mut nodes = self.nodes.write().map_err(|_| Self::lock_poisoned())?;
            nodes.remove(path).is_some()
        };
        if existed {
            debug!(path, "store remove");
            self.publish(ChangeEvent {
                path: path.to_string(),
                kind: ChangeKind::Removed,
                data: None,
            });
        }
        Ok(())
    }

    fn children(&self, parent: &str) -> Result<Vec<String>, StoreError> {
        let prefix = format!("{}/", parent.trim_end_matches('/'));
        let nodes = self.nodes.read().map_err(|_| Self::lock_poisoned())?;
        let mut leaves = Vec::new();
        for path in nodes.keys() {
            if let Some(rest) = path.strip_prefix(&prefix) {
                // Direct children only.
                if !rest.is_empty() && !rest.contains('/') {
                    leaves.push(rest.to_string());
                }
            }
        }
        Ok(leaves)
    }

    fn watch(&self) -> broadcast::Receiver<ChangeEvent> {
        self.events.subscribe()
    }
}
