//! Entity records distributed through the configuration tree.
//!
//! Plain data carriers with serde derives and no invariant logic; writers
//! and watchers exchange them as serialized payloads at the paths built by
//! [`crate::paths`].

use serde::{Deserialize, Serialize};

/// Credentials for one calling application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppAuthData {
    pub app_key: String,
    pub app_secret: String,
    pub enabled: bool,
}

/// One installed gateway plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginData {
    pub id: String,
    pub name: String,
    /// Ordering hint among plugins on the request path.
    #[serde(default)]
    pub role: i32,
    pub enabled: bool,
}

/// One matching condition of a selector or rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionData {
    /// Where the matched value comes from (header, uri, query, ...).
    pub param_type: String,
    /// Comparison operator (match, =, like, ...).
    pub operator: String,
    pub param_name: String,
    pub param_value: String,
}

/// A selector groups traffic for one plugin by coarse condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorData {
    pub id: String,
    pub plugin_name: String,
    pub name: String,
    pub match_mode: i32,
    pub sort: i32,
    pub enabled: bool,
    /// Plugin-specific parameters as schema-free JSON text.
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub conditions: Vec<ConditionData>,
}

/// A rule refines routing within one selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleData {
    pub id: String,
    pub plugin_name: String,
    pub selector_id: String,
    pub name: String,
    pub match_mode: i32,
    pub sort: i32,
    pub enabled: bool,
    /// Plugin-specific parameters as schema-free JSON text.
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub conditions: Vec<ConditionData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic;

    #[test]
    fn test_condition_list_decodes_with_known_shape() {
        let json = r#"[
            {"param_type":"uri","operator":"match","param_name":"/","param_value":"/order/**"},
            {"param_type":"header","operator":"=","param_name":"x-tenant","param_value":"acme"}
        ]"#;
        let conditions: Vec<ConditionData> = dynamic::decode_list(json).unwrap();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].param_type, "uri");
        assert_eq!(conditions[1].operator, "=");
    }

    #[test]
    fn test_selector_handle_is_dynamic_json() {
        let selector = SelectorData {
            id: "s1".into(),
            plugin_name: "divide".into(),
            name: "order".into(),
            match_mode: 0,
            sort: 1,
            enabled: true,
            handle: Some(r#"{"loadBalance":"random","retry":2}"#.into()),
            conditions: vec![],
        };
        let handle = dynamic::decode_value(selector.handle.as_deref().unwrap()).unwrap();
        assert_eq!(handle.get("loadBalance").unwrap().as_str().unwrap(), "random");
        assert_eq!(handle.get("retry").unwrap().as_i64().unwrap(), 2);
    }
}
