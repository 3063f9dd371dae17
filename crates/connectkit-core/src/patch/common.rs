//! Rules applying to framework-wide keys regardless of plugin class

use super::{FieldPatch, FieldRule, KeyTableRule, PatchRule};
use crate::error::Result;
use crate::model::{ComponentType, Importance};
use crate::plugins::converters;
use crate::selector::Selector;

const CONVERTER_OPTIONS: &[(&str, &str)] = &[
    (converters::BYTE_ARRAY, "BYTES"),
    (converters::STRING, "STRING"),
    (converters::JSON, "JSON"),
    (converters::AVRO, "AVRO"),
    (converters::CLOUD_EVENTS, "CLOUDEVENTS"),
];

/// Curated metadata for keys every connector exposes
pub fn common_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "name",
            FieldPatch::new()
                .display_name("Connector name")
                .documentation("Globally unique name to use for this connector.")
                .importance(Importance::High)
                .required(true),
        ),
        ("connector.class", FieldPatch::new().visible(false)),
        (
            "tasks.max",
            FieldPatch::new()
                .display_name("Max tasks")
                .documentation(
                    "Maximum number of tasks to use for this connector. The default is 1. \
                     Each task replicates exclusive set of partitions assigned to it.",
                )
                .importance(Importance::High),
        ),
        (
            "key.converter",
            FieldPatch::new()
                .display_name("Kafka message key format")
                .documentation(
                    "Format of the key in the Kafka topic. BYTES means no conversion is applied.",
                )
                .default_value(converters::BYTE_ARRAY)
                .options(CONVERTER_OPTIONS)
                .component(ComponentType::RadioGroup),
        ),
        (
            "value.converter",
            FieldPatch::new()
                .display_name("Kafka message value format")
                .documentation(
                    "Format of the value in the Kafka topic. BYTES means no conversion is applied.",
                )
                .default_value(converters::BYTE_ARRAY)
                .options(CONVERTER_OPTIONS)
                .component(ComponentType::RadioGroup),
        ),
        (
            "header.converter",
            FieldPatch::new()
                .display_name("Kafka message headers format")
                .documentation(
                    "Format of the headers in the Kafka topic. BYTES means no conversion is applied.",
                )
                .default_value(converters::BYTE_ARRAY)
                .options(CONVERTER_OPTIONS)
                .component(ComponentType::RadioGroup),
        ),
        (
            "topics",
            FieldPatch::new()
                .display_name("Topics to export")
                .documentation("Comma-separated list of the cluster topics you want to replicate."),
        ),
        (
            "topics.regex",
            FieldPatch::new()
                .display_name("Topics regex")
                .documentation(
                    "Java regular expression of topics to replicate. For example: specify `.*` \
                     to replicate all available topics in the cluster. Applicable only when \
                     \"Topics\" is not specified.",
                ),
        ),
        (
            "errors.tolerance",
            FieldPatch::new()
                .display_name("Error tolerance")
                .documentation(
                    "Error tolerance response during connector operation. Default value is \
                     `none` and signals that any error will result in an immediate connector \
                     task failure. Value of `all` changes the behavior to skip over problematic \
                     records.",
                )
                .options(&[("none", "NONE"), ("all", "ALL")])
                .component(ComponentType::RadioGroup),
        ),
        (
            "errors.deadletterqueue.topic.name",
            FieldPatch::new()
                .display_name("Dead letter queue topic name")
                .documentation(
                    "The name of the topic to be used as the dead letter queue (DLQ) for \
                     messages that result in an error when processed by this sink connector, \
                     its transformations, or converters.",
                ),
        ),
        (
            "consumer.override.auto.offset.reset",
            FieldPatch::new()
                .display_name("Consumer auto offset reset")
                .documentation(
                    "What to do when there is no initial offset in Kafka or if the current \
                     offset does not exist any more on the server.",
                )
                .default_value("earliest")
                .options(&[("earliest", "earliest"), ("latest", "latest"), ("none", "none")])
                .component(ComponentType::RadioGroup),
        ),
    ]
}

/// Framework-wide rules, in order
pub fn rules() -> Result<Vec<Box<dyn PatchRule>>> {
    let all = Selector::all()?;
    Ok(vec![
        Box::new(KeyTableRule::new("common", all.clone(), common_table())),
        Box::new(FieldRule::new(
            "lower-importance",
            Selector::include(r"^(ssl\..*|.*\.ssl\..*|header\.converter)$")?,
            all.clone(),
            FieldPatch::new().importance(Importance::Low),
        )),
        Box::new(FieldRule::new(
            "upper-importance",
            Selector::any_of(&["key.converter", "value.converter"])?,
            all,
            FieldPatch::new().importance(Importance::High),
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigMap, ConfigType, ConfigurationEntry};
    use crate::patch::{PatchContext, apply_rules};

    fn patch(key: &str, config_type: ConfigType) -> ConfigurationEntry {
        let rules = rules().unwrap();
        let values = ConfigMap::new();
        let ctx = PatchContext::new("com.example.AnySink", &values);
        apply_rules(&rules, ConfigurationEntry::new(key, config_type), &ctx)
    }

    #[test]
    fn test_value_converter_is_high() {
        let entry = patch("value.converter", ConfigType::Class);
        assert_eq!(entry.definition.importance, Importance::High);
        assert_eq!(
            entry.definition.display_name.as_deref(),
            Some("Kafka message value format")
        );
        assert_eq!(entry.metadata.component, Some(ComponentType::RadioGroup));
        assert_eq!(entry.value.recommended_values.len(), CONVERTER_OPTIONS.len());
    }

    #[test]
    fn test_header_converter_is_low() {
        let entry = patch("header.converter", ConfigType::Class);
        assert_eq!(entry.definition.importance, Importance::Low);
    }

    #[test]
    fn test_ssl_keys_are_low() {
        assert_eq!(
            patch("ssl.keystore.location", ConfigType::String).definition.importance,
            Importance::Low
        );
        assert_eq!(
            patch("source.cluster.ssl.truststore.type", ConfigType::String)
                .definition
                .importance,
            Importance::Low
        );
        assert_eq!(
            patch("sslmode", ConfigType::String).definition.importance,
            Importance::Medium
        );
    }

    #[test]
    fn test_tasks_max_curated() {
        let entry = patch("tasks.max", ConfigType::Int);
        assert_eq!(entry.definition.display_name.as_deref(), Some("Max tasks"));
        assert_eq!(entry.definition.importance, Importance::High);
    }

    #[test]
    fn test_connector_class_hidden() {
        assert!(!patch("connector.class", ConfigType::String).value.visible);
    }
}
