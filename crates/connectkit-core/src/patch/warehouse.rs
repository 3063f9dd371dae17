//! Data warehouse sinks: Google BigQuery and Snowflake

use super::{FieldPatch, KeyTableRule, PatchRule};
use crate::error::Result;
use crate::model::{ComponentType, ConfigType, Importance};
use crate::plugins::{BIGQUERY_SINK, SNOWFLAKE_SINK, converters};

fn bigquery_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "project",
            FieldPatch::new()
                .display_name("Project")
                .documentation("The BigQuery project to write to.")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "defaultDataset",
            FieldPatch::new()
                .display_name("Default dataset")
                .documentation("The default dataset to be used.")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "keyfile",
            FieldPatch::new()
                .display_name("Credentials JSON")
                .documentation("Google Cloud service account key content in JSON format.")
                .importance(Importance::High)
                .required(true)
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "keySource",
            FieldPatch::new().default_value("JSON").visible(false),
        ),
        (
            "autoCreateTables",
            FieldPatch::new()
                .display_name("Auto-create tables")
                .documentation(
                    "Automatically create BigQuery tables if they don't already exist.",
                )
                .default_value("true"),
        ),
        (
            "allowNewBigQueryFields",
            FieldPatch::new()
                .display_name("Allow new BigQuery fields")
                .default_value("true"),
        ),
        (
            "allowBigQueryRequiredFieldRelaxation",
            FieldPatch::new()
                .display_name("Allow BigQuery required field relaxation")
                .default_value("true"),
        ),
        (
            "sanitizeTopics",
            FieldPatch::new()
                .display_name("Sanitize topics")
                .documentation(
                    "Automatically sanitize topic names before using them as table names.",
                )
                .default_value("true"),
        ),
        (
            "topic2TableMap",
            FieldPatch::new()
                .display_name("Topic to table map")
                .documentation(
                    "Map of topics to tables, format: comma-separated tuples, \
                     e.g. `topic1:table1,topic2:table2`.",
                ),
        ),
        (
            "timePartitioningType",
            FieldPatch::new()
                .display_name("Time partitioning type")
                .default_value("DAY")
                .options(&[
                    ("HOUR", "HOUR"),
                    ("DAY", "DAY"),
                    ("MONTH", "MONTH"),
                    ("YEAR", "YEAR"),
                    ("NONE", "NONE"),
                ]),
        ),
    ]
}

fn snowflake_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "snowflake.url.name",
            FieldPatch::new()
                .display_name("Snowflake URL name")
                .documentation(
                    "The URL for accessing your Snowflake account, in the format \
                     `<account_identifier>.snowflakecomputing.com`.",
                )
                .importance(Importance::High)
                .required(true),
        ),
        (
            "snowflake.user.name",
            FieldPatch::new()
                .display_name("Snowflake user name")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "snowflake.private.key",
            FieldPatch::new()
                .display_name("Snowflake private key")
                .documentation(
                    "The private key to authenticate the user. Include only the key, \
                     not the header or footer.",
                )
                .importance(Importance::High)
                .required(true)
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "snowflake.private.key.passphrase",
            FieldPatch::new()
                .display_name("Snowflake private key passphrase")
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "snowflake.database.name",
            FieldPatch::new()
                .display_name("Snowflake database name")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "snowflake.schema.name",
            FieldPatch::new()
                .display_name("Snowflake schema name")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "snowflake.role.name",
            FieldPatch::new().display_name("Snowflake role name"),
        ),
        (
            "snowflake.ingestion.method",
            FieldPatch::new()
                .display_name("Snowflake ingestion method")
                .documentation(
                    "Ingestion method used to load data into Snowflake. `SNOWPIPE_STREAMING` \
                     requires the STRING value converter.",
                )
                .importance(Importance::High)
                .default_value("SNOWPIPE_STREAMING")
                .options(&[
                    ("SNOWPIPE_STREAMING", "SNOWPIPE_STREAMING"),
                    ("SNOWPIPE", "SNOWPIPE"),
                ])
                .component(ComponentType::RadioGroup),
        ),
        (
            "snowflake.topic2table.map",
            FieldPatch::new()
                .display_name("Topic to table map")
                .documentation(
                    "Map of topics to tables, format: comma-separated tuples, \
                     e.g. `topic1:table1,topic2:table2`.",
                ),
        ),
        (
            "snowflake.enable.schematization",
            FieldPatch::new()
                .display_name("Enable schematization")
                .default_value("false"),
        ),
        (
            "buffer.count.records",
            FieldPatch::new()
                .display_name("Buffer count records")
                .default_value("10000"),
        ),
        (
            "buffer.flush.time",
            FieldPatch::new()
                .display_name("Buffer flush time")
                .documentation("Number of seconds between buffer flushes.")
                .default_value("10"),
        ),
        (
            "buffer.size.bytes",
            FieldPatch::new()
                .display_name("Buffer size bytes")
                .default_value("20000000"),
        ),
        (
            "value.converter",
            FieldPatch::new()
                .default_value(converters::STRING)
                .options(&[
                    (converters::STRING, "STRING"),
                    (converters::SNOWFLAKE_JSON, "SNOWFLAKE_JSON"),
                    (converters::SNOWFLAKE_AVRO, "SNOWFLAKE_AVRO"),
                ]),
        ),
    ]
}

/// Warehouse sink rules, in order
pub fn rules() -> Result<Vec<Box<dyn PatchRule>>> {
    Ok(vec![
        Box::new(KeyTableRule::for_plugins(
            "bigquery-sink",
            &[BIGQUERY_SINK],
            bigquery_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "snowflake-sink",
            &[SNOWFLAKE_SINK],
            snowflake_table(),
        )?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigMap, ConfigurationEntry};
    use crate::patch::{PatchContext, apply_rules, builtin_rules};

    #[test]
    fn test_snowflake_value_converter_overrides_common_options() {
        let rules = builtin_rules().unwrap();
        let values = ConfigMap::new();
        let ctx = PatchContext::new(SNOWFLAKE_SINK, &values);
        let entry = apply_rules(
            &rules,
            ConfigurationEntry::new("value.converter", ConfigType::Class),
            &ctx,
        );
        assert_eq!(entry.value.recommended_values.len(), 3);
        assert_eq!(entry.value.recommended_values[0], converters::STRING);
        assert_eq!(entry.definition.importance, Importance::High);
    }

    #[test]
    fn test_bigquery_key_source_hidden() {
        let rules = rules().unwrap();
        let values = ConfigMap::new();
        let ctx = PatchContext::new(BIGQUERY_SINK, &values);
        let entry = apply_rules(
            &rules,
            ConfigurationEntry::new("keySource", ConfigType::String),
            &ctx,
        );
        assert!(!entry.value.visible);
        assert_eq!(entry.current_str().as_deref(), Some("JSON"));
    }
}
