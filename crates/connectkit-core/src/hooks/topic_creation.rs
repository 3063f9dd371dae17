//! Topic auto-creation settings for source connectors
//!
//! The framework accepts `topic.creation.*` keys on every source connector
//! but never lists them in a validation result.

use super::{inject, lookup, set_visible};
use crate::model::{ConfigMap, ConfigType, ConfigurationEntry, Importance};

/// Enables topic auto-creation
pub const ENABLE: &str = "topic.creation.enable";
/// Partition count of auto-created topics
pub const PARTITIONS: &str = "topic.creation.default.partitions";
/// Replication factor of auto-created topics
pub const REPLICATION_FACTOR: &str = "topic.creation.default.replication.factor";

const GROUP: &str = "Topic creation";

/// Inject the topic creation triplet; the numeric keys are only visible when
/// creation is enabled
pub fn topic_creation(
    entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    let entries = inject(
        entries,
        ConfigurationEntry::new(ENABLE, ConfigType::Boolean)
            .with_display_name("Topic creation enabled")
            .with_documentation(
                "Whether to allow automatic creation of topics used by source connectors, \
                 when those topics do not already exist.",
            )
            .with_importance(Importance::Low)
            .with_group(GROUP)
            .with_order(1)
            .with_default_value("true"),
        config,
    );
    let entries = inject(
        entries,
        ConfigurationEntry::new(PARTITIONS, ConfigType::Int)
            .with_display_name("Topic creation partitions")
            .with_documentation(
                "Number of partitions for the created topics. -1 uses the broker default.",
            )
            .with_importance(Importance::Low)
            .with_group(GROUP)
            .with_order(2)
            .with_default_value("-1"),
        config,
    );
    let entries = inject(
        entries,
        ConfigurationEntry::new(REPLICATION_FACTOR, ConfigType::Short)
            .with_display_name("Topic creation replication factor")
            .with_documentation(
                "Replication factor for the created topics. -1 uses the broker default.",
            )
            .with_importance(Importance::Low)
            .with_group(GROUP)
            .with_order(3)
            .with_default_value("-1"),
        config,
    );

    let enabled = lookup(&entries, config, ENABLE).is_some_and(|v| v.eq_ignore_ascii_case("true"));
    set_visible(entries, &[PARTITIONS, REPLICATION_FACTOR], enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_injects_triplet_with_defaults() {
        let entries = topic_creation(Vec::new(), &ConfigMap::new());
        let keys: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(keys, vec![ENABLE, PARTITIONS, REPLICATION_FACTOR]);
        assert_eq!(entries[0].current_str().as_deref(), Some("true"));
        assert_eq!(entries[1].current_str().as_deref(), Some("-1"));
        assert!(entries[1].value.visible);
        assert!(entries[2].value.visible);
    }

    #[test]
    fn test_disabled_hides_numeric_keys() {
        let mut config = ConfigMap::new();
        config.insert(ENABLE.to_string(), json!(false));
        config.insert(PARTITIONS.to_string(), json!(6));
        let entries = topic_creation(Vec::new(), &config);
        assert_eq!(entries[0].current_str().as_deref(), Some("false"));
        assert_eq!(entries[1].current_str().as_deref(), Some("6"));
        assert!(!entries[1].value.visible);
        assert!(!entries[2].value.visible);
    }
}
