//! Pipeline orchestration
//!
//! Wires the patch rules and the guide registry together for both directions:
//!
//! ```text
//! to_wizard:    ValidationResult -> entries -> patch rules -> guide -> WizardResponse
//! to_framework: ConfigMap -> guide -> ConfigMap
//! ```
//!
//! A pipeline is immutable once built and can be shared across threads.

use std::collections::HashMap;

use crate::config::WizardSettings;
use crate::error::Result;
use crate::guide::{DefaultGuide, Guide, catalog};
use crate::model::{ConfigMap, ConfigurationEntry, ValidationResult, WizardResponse};
use crate::patch::{PatchContext, PatchRule, apply_rules, builtin_rules};

/// Rule list plus guide registry
pub struct Pipeline {
    rules: Vec<Box<dyn PatchRule>>,
    guides: HashMap<String, Box<dyn Guide>>,
    default_guide: Box<dyn Guide>,
}

impl Pipeline {
    /// Build the pipeline with every built-in rule and guide
    pub fn new(settings: &WizardSettings) -> Result<Self> {
        let rules = builtin_rules()?;
        let mut guides: HashMap<String, Box<dyn Guide>> = HashMap::new();
        for (plugin_class, guide) in catalog::builtin_guides() {
            if settings.disabled_guides.iter().any(|d| d == plugin_class) {
                tracing::info!(plugin_class, "guide disabled by settings");
                continue;
            }
            let guide = guide.with_settings(
                &settings.injected_values,
                &settings.topics_regex_placeholder,
            );
            guides.insert(plugin_class.to_string(), Box::new(guide));
        }
        let default_guide = DefaultGuide::new(
            settings.injected_values.clone(),
            settings.topics_regex_placeholder.clone(),
        );

        tracing::debug!(
            rules = rules.len(),
            guides = guides.len(),
            "wizard pipeline built"
        );
        Ok(Self::from_parts(rules, guides, Box::new(default_guide)))
    }

    /// Compose a pipeline from custom parts
    pub fn from_parts(
        rules: Vec<Box<dyn PatchRule>>,
        guides: HashMap<String, Box<dyn Guide>>,
        default_guide: Box<dyn Guide>,
    ) -> Self {
        Self {
            rules,
            guides,
            default_guide,
        }
    }

    /// Plugin classes with a dedicated guide, sorted
    pub fn plugin_classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.guides.keys().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }

    /// Pre-process a submission for `plugin_class`
    ///
    /// Plugins without a dedicated guide get the map back unchanged.
    pub fn to_framework(&self, plugin_class: &str, config: ConfigMap) -> Result<ConfigMap> {
        match self.guides.get(plugin_class) {
            Some(guide) => guide.to_framework(config),
            None => {
                tracing::debug!(plugin_class, "no guide registered, passing config through");
                Ok(config)
            }
        }
    }

    /// Build the wizard for a validation result
    pub fn to_wizard(
        &self,
        plugin_class: &str,
        validation: ValidationResult,
        config: &ConfigMap,
    ) -> WizardResponse {
        let mut values = validation.current_values();
        values.extend(config.iter().map(|(k, v)| (k.clone(), v.clone())));
        let ctx = PatchContext::new(plugin_class, &values);

        let entries: Vec<ConfigurationEntry> = validation
            .configs
            .into_iter()
            .map(ConfigurationEntry::from_raw)
            .map(|entry| apply_rules(&self.rules, entry, &ctx))
            .collect();

        let guide = match self.guides.get(plugin_class) {
            Some(guide) => guide.as_ref(),
            None => {
                tracing::debug!(plugin_class, "no guide registered, using default layout");
                self.default_guide.as_ref()
            }
        };
        guide.to_wizard(plugin_class, entries, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{S3_SINK, SNOWFLAKE_SINK};
    use serde_json::json;

    #[test]
    fn test_builtin_registry() {
        let pipeline = Pipeline::new(&WizardSettings::default()).unwrap();
        let classes = pipeline.plugin_classes();
        assert_eq!(classes.len(), 14);
        assert!(classes.contains(&S3_SINK));
        let mut sorted = classes.clone();
        sorted.sort();
        assert_eq!(classes, sorted);
    }

    #[test]
    fn test_disabled_guide_not_registered() {
        let settings = WizardSettings {
            disabled_guides: vec![SNOWFLAKE_SINK.to_string()],
            ..Default::default()
        };
        let pipeline = Pipeline::new(&settings).unwrap();
        assert!(!pipeline.plugin_classes().contains(&SNOWFLAKE_SINK));
    }

    #[test]
    fn test_unknown_plugin_passes_through() {
        let pipeline = Pipeline::new(&WizardSettings::default()).unwrap();
        let mut config = ConfigMap::new();
        config.insert("a".to_string(), json!("b"));
        let out = pipeline
            .to_framework("com.example.Unknown", config.clone())
            .unwrap();
        assert_eq!(out, config);
    }

    #[test]
    fn test_unknown_plugin_uses_default_layout() {
        let pipeline = Pipeline::from_parts(
            Vec::new(),
            HashMap::new(),
            Box::new(DefaultGuide::default()),
        );
        let response = pipeline.to_wizard(
            "com.example.Unknown",
            ValidationResult::default(),
            &ConfigMap::new(),
        );
        assert_eq!(response.name, "com.example.Unknown");
        assert_eq!(response.steps.len(), 1);
        assert_eq!(response.steps[0].name.as_deref(), Some("General"));
    }
}
