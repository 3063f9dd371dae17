//! Patch rules
//!
//! A patch rule matches a (configuration key, plugin class) pair and mutates
//! the schema metadata of the matching [`ConfigurationEntry`]. Rules are
//! evaluated for every entry in registration order; each matching rule applies
//! on top of the previous ones, so later rules win on any field they touch.
//!
//! # Built-in rules
//!
//! - [`DisplayNameRule`] - derive display names from dotted keys
//! - `common` - curated metadata for framework-wide keys and importance overrides
//! - one [`KeyTableRule`] per connector family
//! - `iceberg` - REST catalog visibility
//! - [`ConnectorNameRule`] - random default connector names

use std::collections::HashMap;

use crate::error::Result;
use crate::model::{
    ComponentType, ConfigMap, ConfigType, ConfigurationEntry, Importance, scalar_to_string,
};
use crate::selector::Selector;

pub mod common;
pub mod database;
pub mod display_name;
pub mod http;
pub mod iceberg;
pub mod mirror;
pub mod name;
pub mod storage;
pub mod warehouse;

pub use display_name::{DisplayNameRule, key_to_display_name};
pub use name::ConnectorNameRule;

/// Read-only view a rule gets besides the entry it patches
#[derive(Debug, Clone, Copy)]
pub struct PatchContext<'a> {
    /// Plugin class the validation result belongs to
    pub plugin_class: &'a str,
    values: &'a ConfigMap,
}

impl<'a> PatchContext<'a> {
    /// Create a context over the current values of all keys
    pub fn new(plugin_class: &'a str, values: &'a ConfigMap) -> Self {
        Self {
            plugin_class,
            values,
        }
    }

    /// Current value of a sibling key rendered as a string
    pub fn value_str(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(scalar_to_string)
    }
}

/// A stateless, selector-gated mutation of a configuration entry
pub trait PatchRule: Send + Sync {
    /// Rule name, for logging
    fn name(&self) -> &str;

    /// Whether the rule applies to `key` of `plugin_class`
    fn is_match(&self, key: &str, plugin_class: &str) -> bool;

    /// Return the patched entry
    fn apply(&self, entry: ConfigurationEntry, ctx: &PatchContext<'_>) -> ConfigurationEntry;
}

/// A set of optional field overrides for one key
///
/// Unset fields leave the entry untouched.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    display_name: Option<&'static str>,
    documentation: Option<&'static str>,
    importance: Option<Importance>,
    default_value: Option<&'static str>,
    recommended: Option<&'static [&'static str]>,
    options: Option<&'static [(&'static str, &'static str)]>,
    required: Option<bool>,
    visible: Option<bool>,
    component: Option<ComponentType>,
    config_type: Option<ConfigType>,
}

impl FieldPatch {
    /// Empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name
    pub fn display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    /// Set the documentation
    pub fn documentation(mut self, documentation: &'static str) -> Self {
        self.documentation = Some(documentation);
        self
    }

    /// Set the importance tier
    pub fn importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Inject a default value
    pub fn default_value(mut self, default_value: &'static str) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// Set plain recommended values
    pub fn recommended(mut self, values: &'static [&'static str]) -> Self {
        self.recommended = Some(values);
        self
    }

    /// Set labelled recommended values
    pub fn options(mut self, options: &'static [(&'static str, &'static str)]) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the required flag
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set the visibility flag
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Set the component hint
    pub fn component(mut self, component: ComponentType) -> Self {
        self.component = Some(component);
        self
    }

    /// Override the declared type
    pub fn config_type(mut self, config_type: ConfigType) -> Self {
        self.config_type = Some(config_type);
        self
    }

    /// Apply every set field to `entry`
    pub fn apply(&self, mut entry: ConfigurationEntry) -> ConfigurationEntry {
        if let Some(display_name) = self.display_name {
            entry = entry.with_display_name(display_name);
        }
        if let Some(documentation) = self.documentation {
            entry = entry.with_documentation(documentation);
        }
        if let Some(importance) = self.importance {
            entry = entry.with_importance(importance);
        }
        if let Some(config_type) = self.config_type {
            entry = entry.with_type(config_type);
        }
        if let Some(default_value) = self.default_value {
            entry = entry.with_default_value(default_value);
        }
        if let Some(values) = self.recommended {
            entry = entry.with_recommended_values(values.iter().copied());
        }
        if let Some(options) = self.options {
            entry = entry.with_recommended_options(options);
        }
        if let Some(required) = self.required {
            entry = entry.with_required(required);
        }
        if let Some(visible) = self.visible {
            entry = entry.with_visible(visible);
        }
        if let Some(component) = self.component {
            entry = entry.with_component(component);
        }
        entry
    }
}

/// Applies one [`FieldPatch`] to every key a selector accepts
pub struct FieldRule {
    name: &'static str,
    keys: Selector,
    plugins: Selector,
    patch: FieldPatch,
}

impl FieldRule {
    /// Create a rule
    pub fn new(name: &'static str, keys: Selector, plugins: Selector, patch: FieldPatch) -> Self {
        Self {
            name,
            keys,
            plugins,
            patch,
        }
    }
}

impl PatchRule for FieldRule {
    fn name(&self) -> &str {
        self.name
    }

    fn is_match(&self, key: &str, plugin_class: &str) -> bool {
        self.plugins.is_match(plugin_class) && self.keys.is_match(key)
    }

    fn apply(&self, entry: ConfigurationEntry, _ctx: &PatchContext<'_>) -> ConfigurationEntry {
        self.patch.apply(entry)
    }
}

/// Per-key lookup table of patches for the plugins a selector accepts
pub struct KeyTableRule {
    name: &'static str,
    plugins: Selector,
    table: HashMap<&'static str, FieldPatch>,
}

impl KeyTableRule {
    /// Create a rule from `(key, patch)` pairs
    pub fn new(
        name: &'static str,
        plugins: Selector,
        table: impl IntoIterator<Item = (&'static str, FieldPatch)>,
    ) -> Self {
        Self {
            name,
            plugins,
            table: table.into_iter().collect(),
        }
    }

    /// Convenience constructor for a table scoped to exact plugin classes
    pub fn for_plugins(
        name: &'static str,
        plugin_classes: &[&str],
        table: impl IntoIterator<Item = (&'static str, FieldPatch)>,
    ) -> Result<Self> {
        Ok(Self::new(name, Selector::any_of(plugin_classes)?, table))
    }
}

impl PatchRule for KeyTableRule {
    fn name(&self) -> &str {
        self.name
    }

    fn is_match(&self, key: &str, plugin_class: &str) -> bool {
        self.table.contains_key(key) && self.plugins.is_match(plugin_class)
    }

    fn apply(&self, entry: ConfigurationEntry, _ctx: &PatchContext<'_>) -> ConfigurationEntry {
        match self.table.get(entry.name()) {
            Some(patch) => patch.apply(entry),
            None => entry,
        }
    }
}

/// All built-in rules in registration order
pub fn builtin_rules() -> Result<Vec<Box<dyn PatchRule>>> {
    let mut rules: Vec<Box<dyn PatchRule>> = vec![Box::new(DisplayNameRule::new()?)];
    rules.extend(common::rules()?);
    rules.extend(storage::rules()?);
    rules.extend(database::rules()?);
    rules.extend(warehouse::rules()?);
    rules.extend(http::rules()?);
    rules.extend(mirror::rules()?);
    rules.extend(iceberg::rules()?);
    rules.push(Box::new(ConnectorNameRule::new(crate::plugins::FAMILIES)?));
    Ok(rules)
}

/// Run every matching rule over `entry`, in order
pub fn apply_rules(
    rules: &[Box<dyn PatchRule>],
    entry: ConfigurationEntry,
    ctx: &PatchContext<'_>,
) -> ConfigurationEntry {
    rules.iter().fold(entry, |entry, rule| {
        if rule.is_match(entry.name(), ctx.plugin_class) {
            tracing::trace!(rule = rule.name(), key = entry.name(), "applying patch rule");
            rule.apply(entry, ctx)
        } else {
            entry
        }
    })
}
