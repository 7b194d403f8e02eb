//! Reading entity records back out of the tree.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use crate::codec::{CodecError, PayloadCodec};
use crate::entity::{AppAuthData, PluginData, RuleData, SelectorData};
use crate::paths;
use crate::registry::RegistryResult;
use crate::store::{ChangeEvent, ConfigStore};

/// Reads entity records from their canonical tree paths.
pub struct Subscriber {
    store: Arc<dyn ConfigStore>,
    codec: Arc<dyn PayloadCodec>,
}

impl Subscriber {
    pub fn new(store: Arc<dyn ConfigStore>, codec: Arc<dyn PayloadCodec>) -> Self {
        Self { store, codec }
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str) -> RegistryResult<Option<T>> {
        let Some(bytes) = self.store.read(path)? else {
            return Ok(None);
        };
        let value = self.codec.decode(&bytes)?;
        let record = serde_json::from_value(value).map_err(CodecError::Decode)?;
        Ok(Some(record))
    }

    pub fn app_auth(&self, app_key: &str) -> RegistryResult<Option<AppAuthData>> {
        self.fetch(&paths::app_auth_path(app_key))
    }

    pub fn plugin(&self, plugin_name: &str) -> RegistryResult<Option<PluginData>> {
        self.fetch(&paths::plugin_path(plugin_name))
    }

    pub fn selector(
        &self,
        plugin_name: &str,
        selector_id: &str,
    ) -> RegistryResult<Option<SelectorData>> {
        self.fetch(&paths::selector_path(plugin_name, selector_id))
    }

    pub fn rule(
        &self,
        plugin_name: &str,
        selector_id: &str,
        rule_id: &str,
    ) -> RegistryResult<Option<RuleData>> {
        self.fetch(&paths::rule_path(plugin_name, selector_id, rule_id))
    }

    /// All installed plugins, in tree order.
    pub fn plugins(&self) -> RegistryResult<Vec<PluginData>> {
        let mut plugins = Vec::new();
        for name in self.store.children(&paths::plugin_parent_path())? {
            if let Some(plugin) = self.plugin(&name)? {
                plugins.push(plugin);
            }
        }
        Ok(plugins)
    }

    /// All selectors of one plugin, in tree order.
    pub fn selectors(&self, plugin_name: &str) -> RegistryResult<Vec<SelectorData>> {
        let mut selectors = Vec::new();
        for id in self.store.children(&paths::selector_parent_path(plugin_name))? {
            if let Some(selector) = self.selector(plugin_name, &id)? {
                selectors.push(selector);
            }
        }
        Ok(selectors)
    }

    /// All rules of one plugin, in tree order.
    pub fn rules(&self, plugin_name: &str) -> RegistryResult<Vec<RuleData>> {
        let mut rules = Vec::new();
        for leaf in self.store.children(&paths::rule_parent_path(plugin_name))? {
            let path = format!("{}/{}", paths::rule_parent_path(plugin_name), leaf);
            if let Some(rule) = self.fetch(&path)? {
                rules.push(rule);
            }
        }
        Ok(rules)
    }

    /// Change events for the whole tree.
    pub fn watch(&self) -> broadcast::Receiver<ChangeEvent> {
        self.store.watch()
    }
}
