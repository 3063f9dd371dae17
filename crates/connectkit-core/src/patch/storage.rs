//! Cloud storage sinks: AWS S3 and Google Cloud Storage

use super::{FieldPatch, KeyTableRule, PatchRule};
use crate::error::Result;
use crate::model::{ComponentType, ConfigType, Importance};
use crate::plugins::{GCS_SINK, S3_SINK};

const OUTPUT_FORMATS: &[(&str, &str)] = &[
    ("avro", "AVRO"),
    ("csv", "CSV"),
    ("json", "JSON"),
    ("jsonl", "JSONL"),
    ("parquet", "PARQUET"),
];

const AWS_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ca-central-1",
    "eu-central-1",
    "eu-north-1",
    "eu-south-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

/// Keys shared by both storage sinks
fn shared_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "format.output.type",
            FieldPatch::new()
                .display_name("Kafka message value format")
                .documentation("Format of the output files.")
                .importance(Importance::High)
                .default_value("json")
                .options(OUTPUT_FORMATS)
                .component(ComponentType::RadioGroup),
        ),
        (
            "avro.codec",
            FieldPatch::new()
                .display_name("Avro codec")
                .documentation("The Avro compression codec to be used for Avro output files.")
                .default_value("null")
                .options(&[
                    ("null", "NULL"),
                    ("deflate", "DEFLATE"),
                    ("snappy", "SNAPPY"),
                    ("bzip2", "BZIP2"),
                    ("xz", "XZ"),
                    ("zstandard", "ZSTANDARD"),
                ]),
        ),
        (
            "file.compression.type",
            FieldPatch::new()
                .display_name("File compression")
                .documentation("The compression type used for files put into the bucket.")
                .default_value("none")
                .options(&[
                    ("none", "NONE"),
                    ("gzip", "GZIP"),
                    ("snappy", "SNAPPY"),
                    ("zstd", "ZSTD"),
                ]),
        ),
        (
            "file.name.template",
            FieldPatch::new()
                .display_name("File name template")
                .documentation(
                    "The template for file names. Supports `{{ variable }}` placeholders \
                     for substituting variables: topic, partition, start_offset, timestamp.",
                )
                .default_value("{{topic}}-{{partition}}-{{start_offset}}"),
        ),
        (
            "file.max.records",
            FieldPatch::new()
                .display_name("Max records per file")
                .documentation(
                    "The maximum number of records to put in a single file. \
                     Must be a non-negative number. 0 is interpreted as unlimited.",
                )
                .default_value("1000"),
        ),
        (
            "format.output.fields",
            FieldPatch::new()
                .display_name("Output fields")
                .documentation(
                    "Fields to put into output files. Supported values are: \
                     key, value, offset, timestamp, headers.",
                )
                .default_value("key,value,offset,timestamp")
                .recommended(&["key", "value", "offset", "timestamp", "headers"]),
        ),
        (
            "format.output.fields.value.encoding",
            FieldPatch::new()
                .display_name("Value field encoding")
                .documentation("The type of encoding for the value field.")
                .default_value("none")
                .options(&[("none", "NONE"), ("base64", "Base64")])
                .component(ComponentType::RadioGroup),
        ),
        (
            "format.output.envelope",
            FieldPatch::new()
                .display_name("Envelope for primitives")
                .documentation(
                    "Specifies whether or not to enable envelope for entries with single field.",
                )
                .default_value("true"),
        ),
    ]
}

fn s3_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "aws.access.key.id",
            FieldPatch::new()
                .display_name("AWS access key ID")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "aws.secret.access.key",
            FieldPatch::new()
                .display_name("AWS secret access key")
                .importance(Importance::High)
                .required(true)
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "aws.s3.bucket.name",
            FieldPatch::new()
                .display_name("AWS S3 bucket name")
                .documentation("Name of an existing bucket to store the records in.")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "aws.s3.region",
            FieldPatch::new()
                .display_name("AWS S3 region")
                .importance(Importance::High)
                .default_value("us-east-1")
                .recommended(AWS_REGIONS)
                .component(ComponentType::Select),
        ),
        (
            "aws.s3.prefix",
            FieldPatch::new()
                .display_name("File prefix")
                .documentation("Prefix added to all object keys stored in the bucket."),
        ),
        (
            "aws.s3.endpoint",
            FieldPatch::new()
                .display_name("AWS S3 endpoint")
                .documentation("Explicit AWS S3 endpoint, for S3-compatible object stores.")
                .importance(Importance::Low),
        ),
    ]
}

fn gcs_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "gcs.credentials.json",
            FieldPatch::new()
                .display_name("Google Cloud credentials JSON")
                .documentation("Service account key content in JSON format.")
                .importance(Importance::High)
                .required(true)
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "gcs.bucket.name",
            FieldPatch::new()
                .display_name("GCS bucket name")
                .documentation("Name of an existing bucket to store the records in.")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "file.name.prefix",
            FieldPatch::new()
                .display_name("File name prefix")
                .documentation("Prefix added to all file names stored in the bucket."),
        ),
    ]
}

/// Storage sink rules, in order
pub fn rules() -> Result<Vec<Box<dyn PatchRule>>> {
    Ok(vec![
        Box::new(KeyTableRule::for_plugins(
            "storage-sink",
            &[S3_SINK, GCS_SINK],
            shared_table(),
        )?),
        Box::new(KeyTableRule::for_plugins("s3-sink", &[S3_SINK], s3_table())?),
        Box::new(KeyTableRule::for_plugins("gcs-sink", &[GCS_SINK], gcs_table())?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigMap, ConfigurationEntry};
    use crate::patch::{PatchContext, apply_rules};

    #[test]
    fn test_s3_region_default() {
        let rules = rules().unwrap();
        let values = ConfigMap::new();
        let ctx = PatchContext::new(S3_SINK, &values);
        let entry = apply_rules(
            &rules,
            ConfigurationEntry::new("aws.s3.region", ConfigType::String),
            &ctx,
        );
        assert_eq!(entry.current_str().as_deref(), Some("us-east-1"));
        assert_eq!(entry.definition.override_default.as_deref(), Some("us-east-1"));
        assert_eq!(entry.metadata.component, Some(ComponentType::Select));
    }

    #[test]
    fn test_gcs_does_not_get_s3_keys() {
        let rules = rules().unwrap();
        assert!(!rules.iter().any(|r| r.is_match("aws.s3.region", GCS_SINK)));
        assert!(rules.iter().any(|r| r.is_match("format.output.type", GCS_SINK)));
        assert!(rules.iter().any(|r| r.is_match("avro.codec", S3_SINK)));
    }
}
