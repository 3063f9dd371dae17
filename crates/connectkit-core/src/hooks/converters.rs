//! Converter sub-settings
//!
//! The framework only validates `<prefix>.converter`; the settings below are
//! passed through to the converter instance and are never listed.

use super::{inject, lookup, set_visible};
use crate::model::{ComponentType, ConfigMap, ConfigType, ConfigurationEntry, Importance};
use crate::plugins::converters::{CLOUD_EVENTS, JSON};

const SCHEMA_TOGGLE_PREFIXES: &[(&str, &str)] =
    &[("key", "key"), ("value", "value"), ("header", "headers")];

const CLOUD_EVENTS_PREFIXES: &[(&str, &str)] = &[("key", "key"), ("value", "value")];

const SERIALIZER_OPTIONS: &[(&str, &str)] = &[("json", "JSON"), ("avro", "Avro")];

/// `{key,value,header}.converter.schemas.enable`, visible for the JSON converter
pub fn json_schema_toggles(
    mut entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    for (prefix, label) in SCHEMA_TOGGLE_PREFIXES {
        let converter_key = format!("{prefix}.converter");
        let toggle_key = format!("{prefix}.converter.schemas.enable");
        entries = inject(
            entries,
            ConfigurationEntry::new(toggle_key.as_str(), ConfigType::Boolean)
                .with_display_name(format!("Kafka message {label} JSON contains schema"))
                .with_documentation(
                    "Whether the JSON payload embeds its schema next to the data.",
                )
                .with_importance(Importance::Low)
                .with_default_value("false")
                .with_component(ComponentType::RadioGroup)
                .with_recommended_options(&[("true", "Yes"), ("false", "No")]),
            config,
        );
        let is_json = lookup(&entries, config, &converter_key).as_deref() == Some(JSON);
        entries = set_visible(entries, &[toggle_key.as_str()], is_json);
    }
    entries
}

/// CloudEvents envelope and payload serializers, visible for the CloudEvents
/// converter
pub fn cloud_events_serializers(
    mut entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    for (prefix, label) in CLOUD_EVENTS_PREFIXES {
        let converter_key = format!("{prefix}.converter");
        let serializer_key = format!("{prefix}.converter.serializer.type");
        let data_key = format!("{prefix}.converter.data.serializer.type");
        entries = inject(
            entries,
            ConfigurationEntry::new(serializer_key.as_str(), ConfigType::String)
                .with_display_name(format!("Kafka message {label} CloudEvents serializer"))
                .with_documentation("Serialization format of the CloudEvents envelope.")
                .with_default_value("json")
                .with_component(ComponentType::RadioGroup)
                .with_recommended_options(SERIALIZER_OPTIONS),
            config,
        );
        entries = inject(
            entries,
            ConfigurationEntry::new(data_key.as_str(), ConfigType::String)
                .with_display_name(format!("Kafka message {label} CloudEvents data serializer"))
                .with_documentation("Serialization format of the CloudEvents `data` field.")
                .with_default_value("json")
                .with_component(ComponentType::RadioGroup)
                .with_recommended_options(SERIALIZER_OPTIONS),
            config,
        );
        let is_cloud_events =
            lookup(&entries, config, &converter_key).as_deref() == Some(CLOUD_EVENTS);
        entries = set_visible(
            entries,
            &[serializer_key.as_str(), data_key.as_str()],
            is_cloud_events,
        );
    }
    entries
}
