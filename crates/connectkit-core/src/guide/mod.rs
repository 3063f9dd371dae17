//! Guides: per-plugin wizard layouts and submission pre-processing
//!
//! A guide owns both directions for one plugin class:
//! - `to_framework` turns the user's submission into what the framework
//!   validates and stores.
//! - `to_wizard` turns patched entries into steps and groups.
//!
//! Two strategies exist. [`DefaultGuide`] derives a single step from the
//! entries' own group metadata. [`WizardGuide`] follows an authored layout and
//! drops every key the layout does not name.

use serde_json::Value;

use crate::config::{InjectedValue, TopicsRegexPlaceholder, is_blank};
use crate::error::Result;
use crate::model::{ConfigMap, ConfigurationEntry, WizardResponse};

pub mod catalog;
mod default;
mod wizard;

pub use default::DefaultGuide;
pub use wizard::WizardGuide;

/// Key holding the explicit topic list of a sink
pub const TOPICS: &str = "topics";
/// Key holding the topic pattern of a sink
pub const TOPICS_REGEX: &str = "topics.regex";

/// Per-plugin wizard strategy
pub trait Guide: Send + Sync {
    /// Pre-process a user submission for the framework
    fn to_framework(&self, config: ConfigMap) -> Result<ConfigMap>;

    /// Assemble the wizard from patched entries
    fn to_wizard(
        &self,
        plugin_class: &str,
        entries: Vec<ConfigurationEntry>,
        config: &ConfigMap,
    ) -> WizardResponse;
}

/// Apply injected values in order
pub(crate) fn apply_injected(config: &mut ConfigMap, values: &[InjectedValue]) {
    for value in values {
        value.apply(config);
    }
}

/// Insert the placeholder when neither `topics` nor `topics.regex` is set
pub(crate) fn inject_topics_placeholder(config: &mut ConfigMap, placeholder: &TopicsRegexPlaceholder) {
    let is_unset = |key: &str| config.get(key).is_none_or(is_blank);
    if is_unset(TOPICS) && is_unset(TOPICS_REGEX) {
        tracing::debug!(placeholder = placeholder.as_str(), "injecting topics.regex placeholder");
        config.insert(
            TOPICS_REGEX.to_string(),
            Value::String(placeholder.as_str().to_string()),
        );
    }
}

/// Replace a placeholder `topics.regex` value with an empty string
pub(crate) fn hide_topics_placeholder(
    entries: Vec<ConfigurationEntry>,
    placeholder: &TopicsRegexPlaceholder,
) -> Vec<ConfigurationEntry> {
    entries
        .into_iter()
        .map(|e| {
            if e.name() == TOPICS_REGEX && placeholder.matches(&e.value.value) {
                e.with_value(Value::String(String::new()))
            } else {
                e
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigType;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(None, None, true)]
    #[case(Some(json!(null)), None, true)]
    #[case(Some(json!("")), Some(json!("")), true)]
    #[case(Some(json!("orders")), None, false)]
    #[case(None, Some(json!("orders-.*")), false)]
    fn test_placeholder_injection(
        #[case] topics: Option<Value>,
        #[case] topics_regex: Option<Value>,
        #[case] injected: bool,
    ) {
        let placeholder = TopicsRegexPlaceholder::default();
        let mut config = ConfigMap::new();
        if let Some(v) = topics {
            config.insert(TOPICS.to_string(), v);
        }
        if let Some(v) = topics_regex.clone() {
            config.insert(TOPICS_REGEX.to_string(), v);
        }
        inject_topics_placeholder(&mut config, &placeholder);
        let has_placeholder = config
            .get(TOPICS_REGEX)
            .is_some_and(|v| placeholder.matches(v));
        assert_eq!(has_placeholder, injected);
        if !injected && let Some(v) = topics_regex {
            assert_eq!(config[TOPICS_REGEX], v);
        }
    }

    #[test]
    fn test_placeholder_hidden() {
        let placeholder = TopicsRegexPlaceholder::new("__all__");
        let entries = vec![
            ConfigurationEntry::new(TOPICS_REGEX, ConfigType::String).with_value(json!("__all__")),
            ConfigurationEntry::new(TOPICS, ConfigType::List).with_value(json!("__all__")),
        ];
        let entries = hide_topics_placeholder(entries, &placeholder);
        assert_eq!(entries[0].value.value, json!(""));
        assert_eq!(entries[1].value.value, json!("__all__"));
    }
}
