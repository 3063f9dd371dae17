//! Fallback guide for plugins without an authored layout

use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::{Guide, apply_injected, hide_topics_placeholder, inject_topics_placeholder};
use crate::config::{InjectedValue, TopicsRegexPlaceholder};
use crate::error::Result;
use crate::model::{ConfigMap, ConfigurationEntry, WizardGroup, WizardResponse, WizardStep};

const STEP_NAME: &str = "General";
const COMMON_GROUP: &str = "common";
const COMMON_GROUP_BONUS: usize = 100;

/// Groups entries by their own group metadata into a single step
#[derive(Debug, Clone, Default)]
pub struct DefaultGuide {
    injected: Vec<InjectedValue>,
    placeholder: TopicsRegexPlaceholder,
}

impl DefaultGuide {
    /// Create a guide with global injected values and placeholder
    pub fn new(injected: Vec<InjectedValue>, placeholder: TopicsRegexPlaceholder) -> Self {
        Self {
            injected,
            placeholder,
        }
    }
}

fn group_score(name: &str, entries: &[ConfigurationEntry]) -> usize {
    let bonus = if name.eq_ignore_ascii_case(COMMON_GROUP) {
        COMMON_GROUP_BONUS
    } else {
        0
    };
    bonus + entries.iter().filter(|e| e.is_important()).count()
}

impl Guide for DefaultGuide {
    fn to_framework(&self, mut config: ConfigMap) -> Result<ConfigMap> {
        apply_injected(&mut config, &self.injected);
        inject_topics_placeholder(&mut config, &self.placeholder);
        Ok(config)
    }

    fn to_wizard(
        &self,
        plugin_class: &str,
        entries: Vec<ConfigurationEntry>,
        _config: &ConfigMap,
    ) -> WizardResponse {
        let entries = hide_topics_placeholder(entries, &self.placeholder);

        // BTreeMap yields groups sorted by name
        let mut by_group: BTreeMap<String, Vec<ConfigurationEntry>> = BTreeMap::new();
        for entry in &entries {
            let group = entry.definition.group.clone().unwrap_or_default();
            by_group.entry(group).or_default().push(entry.clone());
        }

        let mut groups: Vec<(String, Vec<ConfigurationEntry>)> = by_group.into_iter().collect();
        for (_, members) in &mut groups {
            members.sort_by_key(|e| e.definition.order);
        }
        groups.sort_by_key(|(name, members)| Reverse(group_score(name, members)));

        let step = groups
            .into_iter()
            .fold(WizardStep::new(STEP_NAME), |step, (name, members)| {
                let group = if name.is_empty() {
                    WizardGroup::unnamed()
                } else {
                    WizardGroup::new(name)
                };
                let keys: Vec<&str> = members.iter().map(|e| e.name()).collect();
                step.with_group(group.with_keys(&keys))
            });

        WizardResponse {
            name: plugin_class.to_string(),
            configs: entries,
            steps: vec![step],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigType, Importance};
    use serde_json::json;

    fn entry(key: &str, group: &str, order: i32) -> ConfigurationEntry {
        ConfigurationEntry::new(key, ConfigType::String)
            .with_group(group)
            .with_order(order)
    }

    fn group_names(response: &WizardResponse) -> Vec<Option<&str>> {
        response.steps[0]
            .groups
            .iter()
            .map(|g| g.name.as_deref())
            .collect()
    }

    #[test]
    fn test_common_group_first_then_by_name() {
        let guide = DefaultGuide::default();
        let entries = vec![
            entry("z1", "zzz", 1),
            entry("c1", "Common", 1),
            entry("a1", "aaa", 1),
        ];
        let response = guide.to_wizard("x.Sink", entries, &ConfigMap::new());
        assert_eq!(response.steps.len(), 1);
        assert_eq!(response.steps[0].name.as_deref(), Some("General"));
        assert_eq!(
            group_names(&response),
            vec![Some("Common"), Some("aaa"), Some("zzz")]
        );
    }

    #[test]
    fn test_important_entries_raise_group() {
        let guide = DefaultGuide::default();
        let entries = vec![
            entry("a1", "aaa", 1),
            entry("z1", "zzz", 1).with_importance(Importance::High),
        ];
        let response = guide.to_wizard("x.Sink", entries, &ConfigMap::new());
        assert_eq!(group_names(&response), vec![Some("zzz"), Some("aaa")]);
    }

    #[test]
    fn test_entries_sorted_by_order_within_group() {
        let guide = DefaultGuide::default();
        let entries = vec![
            entry("third", "g", 3),
            entry("first", "g", 1),
            entry("second-a", "g", 2),
            entry("second-b", "g", 2),
        ];
        let response = guide.to_wizard("x.Sink", entries, &ConfigMap::new());
        assert_eq!(
            response.steps[0].groups[0].config_keys,
            vec!["first", "second-a", "second-b", "third"]
        );
    }

    #[test]
    fn test_ungrouped_entries_get_unnamed_group() {
        let guide = DefaultGuide::default();
        let entries = vec![ConfigurationEntry::new("loose", ConfigType::String)];
        let response = guide.to_wizard("x.Sink", entries, &ConfigMap::new());
        let group = &response.steps[0].groups[0];
        assert!(group.name.is_none());
        assert_eq!(group.config_keys, vec!["loose"]);
    }

    #[test]
    fn test_to_framework_injects_values_and_placeholder() {
        let guide = DefaultGuide::new(
            vec![
                InjectedValue::new("fill", "default"),
                InjectedValue::authoritative("force", "forced"),
            ],
            TopicsRegexPlaceholder::new("__all__"),
        );
        let mut config = ConfigMap::new();
        config.insert("fill".to_string(), json!("user"));
        config.insert("force".to_string(), json!("user"));
        let config = guide.to_framework(config).unwrap();
        assert_eq!(config["fill"], json!("user"));
        assert_eq!(config["force"], json!("forced"));
        assert_eq!(config["topics.regex"], json!("__all__"));
    }
}
