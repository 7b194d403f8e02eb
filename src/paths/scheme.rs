//! Canonical path construction for each entity kind.
//!
//! Layout of the configuration tree:
//!
//! | Kind     | Parent           | Full path                                    |
//! |----------|------------------|----------------------------------------------|
//! | AppAuth  | `/soul/auth`     | `/soul/auth/{appKey}`                        |
//! | Plugin   | `/soul/plugin`   | `/soul/plugin/{pluginName}`                  |
//! | Selector | `/soul/selector` | `/soul/selector/{pluginName}/{selectorId}`   |
//! | Rule     | `/soul/rule`     | `/soul/rule/{pluginName}/{selectorId}-{ruleId}` |

/// Parent node for application auth keys.
pub const APP_AUTH_PARENT: &str = "/soul/auth";

/// Parent node for plugin entries.
pub const PLUGIN_PARENT: &str = "/soul/plugin";

/// Parent node for selector entries.
pub const SELECTOR_PARENT: &str = "/soul/selector";

const RULE_PARENT: &str = "/soul/rule";

/// Join character between selector id and rule id in a rule leaf.
///
/// Not escaped: ids containing this character produce a leaf that is
/// ambiguous on reverse parsing (see [`split_rule_key`]).
pub const SELECTOR_JOIN_RULE: &str = "-";

/// Path for an application auth key entry.
pub fn app_auth_path(app_key: &str) -> String {
    format!("{}/{}", APP_AUTH_PARENT, app_key)
}

/// Parent path under which all plugin entries live.
pub fn plugin_parent_path() -> String {
    PLUGIN_PARENT.to_string()
}

/// Path for a plugin entry.
pub fn plugin_path(plugin_name: &str) -> String {
    format!("{}/{}", PLUGIN_PARENT, plugin_name)
}

/// Parent path for the selectors of one plugin.
pub fn selector_parent_path(plugin_name: &str) -> String {
    format!("{}/{}", SELECTOR_PARENT, plugin_name)
}

/// Path for a selector entry.
pub fn selector_path(plugin_name: &str, selector_id: &str) -> String {
    format!("{}/{}/{}", SELECTOR_PARENT, plugin_name, selector_id)
}

/// Parent path for the rules of one plugin.
pub fn rule_parent_path(plugin_name: &str) -> String {
    format!("{}/{}", RULE_PARENT, plugin_name)
}

/// Path for a rule entry. The leaf is the composite `selectorId-ruleId` key.
pub fn rule_path(plugin_name: &str, selector_id: &str, rule_id: &str) -> String {
    format!(
        "{}/{}{}{}",
        rule_parent_path(plugin_name),
        selector_id,
        SELECTOR_JOIN_RULE,
        rule_id
    )
}

/// Split a rule leaf back into `(selector_id, rule_id)`.
///
/// Splits on the first join character, so the result is only reliable when
/// selector ids do not themselves contain `-`. Returns `None` for a leaf
/// with no join character at all.
pub fn split_rule_key(leaf: &str) -> Option<(&str, &str)> {
    leaf.split_once(SELECTOR_JOIN_RULE)
}
