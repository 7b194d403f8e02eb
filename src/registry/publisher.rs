//! Writing entity records into the tree.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::codec::{CodecError, PayloadCodec};
use crate::entity::{AppAuthData, PluginData, RuleData, SelectorData};
use crate::paths;
use crate::registry::RegistryResult;
use crate::store::ConfigStore;

/// Publishes entity records at their canonical tree paths.
pub struct Publisher {
    store: Arc<dyn ConfigStore>,
    codec: Arc<dyn PayloadCodec>,
}

impl Publisher {
    pub fn new(store: Arc<dyn ConfigStore>, codec: Arc<dyn PayloadCodec>) -> Self {
        Self { store, codec }
    }

    fn put<T: Serialize>(&self, path: &str, record: &T) -> RegistryResult<()> {
        let value = serde_json::to_value(record).map_err(CodecError::Encode)?;
        let bytes = self.codec.encode(&value)?;
        self.store.write(path, bytes)?;
        debug!(path, codec = self.codec.name(), "published record");
        Ok(())
    }

    pub fn publish_app_auth(&self, auth: &AppAuthData) -> RegistryResult<()> {
        self.put(&paths::app_auth_path(&auth.app_key), auth)
    }

    pub fn publish_plugin(&self, plugin: &PluginData) -> RegistryResult<()> {
        self.put(&paths::plugin_path(&plugin.name), plugin)
    }

    pub fn publish_selector(&self, selector: &SelectorData) -> RegistryResult<()> {
        self.put(
            &paths::selector_path(&selector.plugin_name, &selector.id),
            selector,
        )
    }

    pub fn publish_rule(&self, rule: &RuleData) -> RegistryResult<()> {
        self.put(
            &paths::rule_path(&rule.plugin_name, &rule.selector_id, &rule.id),
            rule,
        )
    }

    pub fn remove_app_auth(&self, app_key: &str) -> RegistryResult<()> {
        Ok(self.store.remove(&paths::app_auth_path(app_key))?)
    }

    pub fn remove_plugin(&self, plugin_name: &str) -> RegistryResult<()> {
        Ok(self.store.remove(&paths::plugin_path(plugin_name))?)
    }

    pub fn remove_selector(&self, plugin_name: &str, selector_id: &str) -> RegistryResult<()> {
        Ok(self
            .store
            .remove(&paths::selector_path(plugin_name, selector_id))?)
    }

    pub fn remove_rule(
        &self,
        plugin_name: &str,
        selector_id: &str,
        rule_id: &str,
    ) -> RegistryResult<()> {
        Ok(self
            .store
            .remove(&paths::rule_path(plugin_name, selector_id, rule_id))?)
    }
}
