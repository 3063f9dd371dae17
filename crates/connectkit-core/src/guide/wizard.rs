//! Guide following an authored step/group layout

use std::collections::{HashMap, HashSet};

use super::{Guide, apply_injected, hide_topics_placeholder, inject_topics_placeholder};
use crate::config::{InjectedValue, TopicsRegexPlaceholder};
use crate::error::Result;
use crate::hooks::{SubmissionHook, WizardHook};
use crate::model::{ConfigMap, ConfigurationEntry, WizardGroup, WizardResponse, WizardStep};

/// Authored wizard for one plugin class
///
/// Only keys named by the layout reach the response, in the order the layout
/// names them.
#[derive(Debug, Clone, Default)]
pub struct WizardGuide {
    steps: Vec<WizardStep>,
    sink: bool,
    injected: Vec<InjectedValue>,
    global_injected: Vec<InjectedValue>,
    placeholder: TopicsRegexPlaceholder,
    wizard_hooks: Vec<WizardHook>,
    submission_hooks: Vec<SubmissionHook>,
}

impl WizardGuide {
    /// Create an empty guide
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn step(mut self, step: WizardStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Mark the plugin as a sink; submissions without topics get the placeholder
    pub fn sink(mut self) -> Self {
        self.sink = true;
        self
    }

    /// Add a value injected into every submission
    pub fn inject(mut self, value: InjectedValue) -> Self {
        self.injected.push(value);
        self
    }

    /// Append a read-path hook
    pub fn wizard_hook(mut self, hook: WizardHook) -> Self {
        self.wizard_hooks.push(hook);
        self
    }

    /// Append a write-path hook
    pub fn submission_hook(mut self, hook: SubmissionHook) -> Self {
        self.submission_hooks.push(hook);
        self
    }

    /// Apply process-wide settings
    pub fn with_settings(
        mut self,
        global_injected: &[InjectedValue],
        placeholder: &TopicsRegexPlaceholder,
    ) -> Self {
        self.global_injected = global_injected.to_vec();
        self.placeholder = placeholder.clone();
        self
    }

    /// Authored steps
    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    fn project(&self, entries: Vec<ConfigurationEntry>) -> (Vec<ConfigurationEntry>, Vec<WizardStep>) {
        let mut by_key: HashMap<String, ConfigurationEntry> = entries
            .into_iter()
            .map(|e| (e.name().to_string(), e))
            .collect();

        let mut configs = Vec::new();
        let mut emitted: HashSet<String> = HashSet::new();
        let mut steps = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let mut groups = Vec::with_capacity(step.groups.len());
            for group in &step.groups {
                let config_keys: Vec<String> = group
                    .config_keys
                    .iter()
                    .filter(|key| emitted.contains(*key) || by_key.contains_key(*key))
                    .cloned()
                    .collect();
                for key in &config_keys {
                    if let Some(entry) = by_key.remove(key) {
                        emitted.insert(key.clone());
                        configs.push(entry);
                    }
                }
                groups.push(WizardGroup {
                    config_keys,
                    ..group.clone()
                });
            }
            steps.push(WizardStep {
                groups,
                ..step.clone()
            });
        }

        if !by_key.is_empty() {
            tracing::trace!(dropped = by_key.len(), "dropping keys not named by the wizard layout");
        }
        (configs, steps)
    }
}

impl Guide for WizardGuide {
    fn to_framework(&self, mut config: ConfigMap) -> Result<ConfigMap> {
        apply_injected(&mut config, &self.global_injected);
        apply_injected(&mut config, &self.injected);
        if self.sink {
            inject_topics_placeholder(&mut config, &self.placeholder);
        }
        self.submission_hooks
            .iter()
            .try_fold(config, |config, hook| hook(config))
    }

    fn to_wizard(
        &self,
        plugin_class: &str,
        entries: Vec<ConfigurationEntry>,
        config: &ConfigMap,
    ) -> WizardResponse {
        let entries = self
            .wizard_hooks
            .iter()
            .fold(entries, |entries, hook| hook(entries, config));
        let entries = hide_topics_placeholder(entries, &self.placeholder);
        let (configs, steps) = self.project(entries);
        WizardResponse {
            name: plugin_class.to_string(),
            configs,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigType;
    use serde_json::json;

    fn entries(keys: &[&str]) -> Vec<ConfigurationEntry> {
        keys.iter()
            .map(|k| ConfigurationEntry::new(*k, ConfigType::String))
            .collect()
    }

    #[test]
    fn test_allow_list_projection() {
        let guide = WizardGuide::new().step(
            WizardStep::new("Connection").with_group(WizardGroup::new("G").with_keys(&["a", "b"])),
        );
        let response = guide.to_wizard("x.Sink", entries(&["a", "b", "c"]), &ConfigMap::new());
        assert_eq!(response.config_keys(), vec!["a", "b"]);
        assert_eq!(response.steps[0].groups[0].config_keys, vec!["a", "b"]);
    }

    #[test]
    fn test_layout_order_and_missing_keys() {
        let guide = WizardGuide::new()
            .step(
                WizardStep::new("One")
                    .with_group(WizardGroup::new("G1").with_keys(&["b", "missing", "a"])),
            )
            .step(WizardStep::new("Two").with_group(WizardGroup::new("G2").with_keys(&["a", "c"])));
        let response = guide.to_wizard("x.Sink", entries(&["a", "b", "c"]), &ConfigMap::new());
        assert_eq!(response.config_keys(), vec!["b", "a", "c"]);
        assert_eq!(response.steps[0].groups[0].config_keys, vec!["b", "a"]);
        // a key named twice is listed in both groups but emitted once
        assert_eq!(response.steps[1].groups[0].config_keys, vec!["a", "c"]);
    }

    fn add_marker(mut entries: Vec<ConfigurationEntry>, _config: &ConfigMap) -> Vec<ConfigurationEntry> {
        entries.push(ConfigurationEntry::new("marker", ConfigType::String));
        entries
    }

    fn rename_marker(config: ConfigMap) -> Result<ConfigMap> {
        let mut config = config;
        if let Some(v) = config.remove("marker") {
            config.insert("renamed".to_string(), v);
        }
        Ok(config)
    }

    #[test]
    fn test_hooks_run_in_order() {
        let guide = WizardGuide::new()
            .wizard_hook(add_marker)
            .submission_hook(rename_marker)
            .step(WizardStep::new("S").with_group(WizardGroup::new("G").with_keys(&["marker"])));
        let response = guide.to_wizard("x.Source", Vec::new(), &ConfigMap::new());
        assert_eq!(response.config_keys(), vec!["marker"]);

        let mut config = ConfigMap::new();
        config.insert("marker".to_string(), json!("v"));
        let config = guide.to_framework(config).unwrap();
        assert_eq!(config["renamed"], json!("v"));
    }

    #[test]
    fn test_only_sinks_get_placeholder() {
        let source = WizardGuide::new();
        assert!(source.to_framework(ConfigMap::new()).unwrap().is_empty());

        let sink = WizardGuide::new().sink();
        let config = sink.to_framework(ConfigMap::new()).unwrap();
        assert!(TopicsRegexPlaceholder::default().matches(&config["topics.regex"]));
    }

    #[test]
    fn test_guide_values_applied_after_global() {
        let guide = WizardGuide::new()
            .inject(InjectedValue::authoritative("keySource", "JSON"))
            .with_settings(
                &[InjectedValue::authoritative("keySource", "FILE")],
                &TopicsRegexPlaceholder::default(),
            );
        let config = guide.to_framework(ConfigMap::new()).unwrap();
        assert_eq!(config["keySource"], json!("JSON"));
    }
}
