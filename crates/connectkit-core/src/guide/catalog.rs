//! Authored wizard layouts of the supported connector families

use super::WizardGuide;
use crate::config::InjectedValue;
use crate::hooks::{converters, credentials, topic_creation, visibility};
use crate::model::{WizardGroup, WizardStep};
use crate::plugins::{
    BIGQUERY_SINK, GCS_SINK, HTTP_SOURCE, ICEBERG_SINK, JDBC_SINK, JDBC_SOURCE, MIRROR_CHECKPOINT,
    MIRROR_HEARTBEAT, MIRROR_SOURCE, MONGODB_SINK, MONGODB_SOURCE, S3_SINK, SNOWFLAKE_SINK,
    TABULAR_ICEBERG_SINK,
};

// =============================================================================
// Shared groups
// =============================================================================

const SINK_TOPICS: &[&str] = &["topics", "topics.regex"];

const CONVERTERS: &[&str] = &[
    "key.converter",
    "key.converter.schemas.enable",
    "value.converter",
    "value.converter.schemas.enable",
    "header.converter",
    "header.converter.schemas.enable",
];

const SOURCE_CONVERTERS: &[&str] = &[
    "key.converter",
    "key.converter.schemas.enable",
    "key.converter.serializer.type",
    "key.converter.data.serializer.type",
    "value.converter",
    "value.converter.schemas.enable",
    "value.converter.serializer.type",
    "value.converter.data.serializer.type",
    "header.converter",
    "header.converter.schemas.enable",
];

const SINK_ERROR_HANDLING: &[&str] = &[
    "errors.tolerance",
    "errors.deadletterqueue.topic.name",
    "consumer.override.auto.offset.reset",
];

const TOPIC_CREATION: &[&str] = &[
    topic_creation::ENABLE,
    topic_creation::PARTITIONS,
    topic_creation::REPLICATION_FACTOR,
];

const MIRROR_SOURCE_CLUSTER: &[&str] = &[
    "source.cluster.alias",
    "source.cluster.bootstrap.servers",
    "source.cluster.security.protocol",
    "source.cluster.sasl.mechanism",
    credentials::SASL_USERNAME,
    credentials::SASL_PASSWORD,
];

fn topics_step() -> WizardStep {
    WizardStep::new("Topics").with_group(
        WizardGroup::new("Topics to export")
            .with_description("Provide topic names and/or a regular expression matching them.")
            .with_keys(SINK_TOPICS),
    )
}

fn review_step() -> WizardStep {
    WizardStep::new("Review").with_group(WizardGroup::unnamed().with_keys(&["name", "tasks.max"]))
}

fn sink_properties(family_keys: &[&str]) -> WizardStep {
    WizardStep::new("Connector properties")
        .with_group(WizardGroup::unnamed().with_keys(family_keys))
        .with_group(WizardGroup::new("Message formats").with_keys(CONVERTERS))
        .with_group(WizardGroup::new("Error handling").with_keys(SINK_ERROR_HANDLING))
}

fn source_properties(family_keys: &[&str], converters: &[&str]) -> WizardStep {
    WizardStep::new("Connector properties")
        .with_group(WizardGroup::unnamed().with_keys(family_keys))
        .with_group(WizardGroup::new("Message formats").with_keys(converters))
        .with_group(WizardGroup::new("Topic creation").with_keys(TOPIC_CREATION))
}

// =============================================================================
// Cloud storage
// =============================================================================

const STORAGE_FORMAT: &[&str] = &[
    "format.output.type",
    "avro.codec",
    "format.output.fields",
    "format.output.fields.value.encoding",
    "format.output.envelope",
    "file.compression.type",
    "file.max.records",
    "file.name.template",
];

fn s3_sink() -> WizardGuide {
    WizardGuide::new()
        .sink()
        .step(
            WizardStep::new("Connection").with_group(
                WizardGroup::new("S3 bucket")
                    .with_documentation_link(
                        "https://docs.aws.amazon.com/AmazonS3/latest/userguide/creating-bucket.html",
                    )
                    .with_keys(&[
                        "aws.access.key.id",
                        "aws.secret.access.key",
                        "aws.s3.bucket.name",
                        "aws.s3.region",
                        "aws.s3.prefix",
                        "aws.s3.endpoint",
                    ]),
            ),
        )
        .step(topics_step())
        .step(sink_properties(STORAGE_FORMAT))
        .step(review_step())
        .wizard_hook(converters::json_schema_toggles)
        .wizard_hook(visibility::avro_codec)
}

fn gcs_sink() -> WizardGuide {
    WizardGuide::new()
        .sink()
        .step(
            WizardStep::new("Connection").with_group(
                WizardGroup::new("GCS bucket")
                    .with_keys(&["gcs.credentials.json", "gcs.bucket.name", "file.name.prefix"]),
            ),
        )
        .step(topics_step())
        .step(sink_properties(STORAGE_FORMAT))
        .step(review_step())
        .wizard_hook(converters::json_schema_toggles)
        .wizard_hook(visibility::avro_codec)
}

// =============================================================================
// Databases
// =============================================================================

const JDBC_CONNECTION: &[&str] = &[
    credentials::JDBC_URL,
    credentials::JDBC_SSL_MODE,
    "connection.user",
    "connection.password",
    "connection.attempts",
];

const MONGODB_CONNECTION: &[&str] = &[
    credentials::MONGODB_URL,
    credentials::MONGODB_USERNAME,
    credentials::MONGODB_PASSWORD,
    "database",
    "collection",
];

fn jdbc_source() -> WizardGuide {
    WizardGuide::new()
        .step(
            WizardStep::new("Connection")
                .with_group(WizardGroup::new("Database").with_keys(JDBC_CONNECTION)),
        )
        .step(source_properties(
            &[
                "mode",
                "incrementing.column.name",
                "timestamp.column.name",
                "table.whitelist",
                "table.blacklist",
                "query",
                "topic.prefix",
                "poll.interval.ms",
                "batch.max.rows",
            ],
            SOURCE_CONVERTERS,
        ))
        .step(review_step())
        .wizard_hook(credentials::jdbc_driver_flags)
        .wizard_hook(converters::json_schema_toggles)
        .wizard_hook(converters::cloud_events_serializers)
        .wizard_hook(topic_creation::topic_creation)
        .submission_hook(credentials::jdbc_connection_url)
}

fn jdbc_sink() -> WizardGuide {
    WizardGuide::new()
        .sink()
        .step(
            WizardStep::new("Connection")
                .with_group(WizardGroup::new("Database").with_keys(JDBC_CONNECTION)),
        )
        .step(topics_step())
        .step(sink_properties(&[
            "insert.mode",
            "pk.mode",
            "table.name.format",
            "auto.create",
            "auto.evolve",
            "delete.enabled",
            "batch.size",
        ]))
        .step(review_step())
        .wizard_hook(credentials::jdbc_driver_flags)
        .wizard_hook(converters::json_schema_toggles)
        .submission_hook(credentials::jdbc_connection_url)
}

fn mongodb_source() -> WizardGuide {
    WizardGuide::new()
        .step(
            WizardStep::new("Connection")
                .with_group(WizardGroup::new("MongoDB").with_keys(MONGODB_CONNECTION)),
        )
        .step(source_properties(
            &[
                "topic.prefix",
                "startup.mode",
                "pipeline",
                "publish.full.document.only",
                "output.format.key",
                "output.format.value",
            ],
            SOURCE_CONVERTERS,
        ))
        .step(review_step())
        .wizard_hook(credentials::mongodb_fields)
        .wizard_hook(converters::json_schema_toggles)
        .wizard_hook(converters::cloud_events_serializers)
        .wizard_hook(topic_creation::topic_creation)
        .submission_hook(credentials::mongodb_connection_uri)
}

fn mongodb_sink() -> WizardGuide {
    WizardGuide::new()
        .sink()
        .step(
            WizardStep::new("Connection")
                .with_group(WizardGroup::new("MongoDB").with_keys(MONGODB_CONNECTION)),
        )
        .step(topics_step())
        .step(sink_properties(&[
            "document.id.strategy",
            "writemodel.strategy",
            "delete.on.null.values",
            "max.batch.size",
        ]))
        .step(review_step())
        .wizard_hook(credentials::mongodb_fields)
        .wizard_hook(converters::json_schema_toggles)
        .submission_hook(credentials::mongodb_connection_uri)
}

// =============================================================================
// Warehouses
// =============================================================================

fn bigquery_sink() -> WizardGuide {
    WizardGuide::new()
        .sink()
        .inject(InjectedValue::authoritative("keySource", "JSON"))
        .step(
            WizardStep::new("Connection").with_group(
                WizardGroup::new("BigQuery")
                    .with_keys(&["project", "defaultDataset", "keyfile"]),
            ),
        )
        .step(topics_step())
        .step(sink_properties(&[
            "autoCreateTables",
            "allowNewBigQueryFields",
            "allowBigQueryRequiredFieldRelaxation",
            "sanitizeTopics",
            "topic2TableMap",
            "timePartitioningType",
        ]))
        .step(review_step())
        .wizard_hook(converters::json_schema_toggles)
}

fn snowflake_sink() -> WizardGuide {
    WizardGuide::new()
        .sink()
        .step(
            WizardStep::new("Connection").with_group(WizardGroup::new("Snowflake").with_keys(&[
                "snowflake.url.name",
                "snowflake.user.name",
                "snowflake.private.key",
                "snowflake.private.key.passphrase",
                "snowflake.role.name",
                "snowflake.database.name",
                "snowflake.schema.name",
            ])),
        )
        .step(topics_step())
        .step(sink_properties(&[
            "snowflake.ingestion.method",
            "snowflake.topic2table.map",
            "snowflake.enable.schematization",
            "buffer.count.records",
            "buffer.flush.time",
            "buffer.size.bytes",
        ]))
        .step(review_step())
        .wizard_hook(converters::json_schema_toggles)
        .wizard_hook(visibility::snowflake_streaming_converter)
}

// =============================================================================
// HTTP
// =============================================================================

fn http_source() -> WizardGuide {
    WizardGuide::new()
        .step(
            WizardStep::new("Connection").with_group(WizardGroup::new("HTTP request").with_keys(&[
                "http.request.url",
                "http.request.method",
                "http.request.headers",
                "http.request.body",
                "http.auth.type",
                "http.auth.user",
                "http.auth.password",
            ])),
        )
        .step(source_properties(
            &[
                "kafka.topic",
                "http.timer.interval.millis",
                "http.response.list.pointer",
                "http.response.record.offset.pointer",
                "http.offset.initial",
            ],
            SOURCE_CONVERTERS,
        ))
        .step(review_step())
        .wizard_hook(visibility::http_basic_auth)
        .wizard_hook(converters::json_schema_toggles)
        .wizard_hook(converters::cloud_events_serializers)
        .wizard_hook(topic_creation::topic_creation)
}

// =============================================================================
// Mirroring
// =============================================================================

fn mirror_connection() -> WizardStep {
    WizardStep::new("Connection")
        .with_group(WizardGroup::new("Source cluster").with_keys(MIRROR_SOURCE_CLUSTER))
}

fn mirror_source() -> WizardGuide {
    WizardGuide::new()
        .step(mirror_connection())
        .step(
            WizardStep::new("Connector properties")
                .with_group(WizardGroup::new("Topics").with_keys(&[
                    "topics",
                    "topics.exclude",
                    "replication.policy.class",
                    "target.cluster.alias",
                    "replication.factor",
                ]))
                .with_group(WizardGroup::new("Synchronisation").with_keys(&[
                    "sync.topic.configs.enabled",
                    "sync.topic.acls.enabled",
                    "offset-syncs.topic.location",
                ])),
        )
        .step(review_step())
        .wizard_hook(credentials::mirror_sasl_fields)
        .wizard_hook(visibility::mirror_sasl)
        .submission_hook(credentials::mirror_sasl_jaas)
}

fn mirror_checkpoint() -> WizardGuide {
    WizardGuide::new()
        .step(mirror_connection())
        .step(
            WizardStep::new("Connector properties").with_group(WizardGroup::new("Consumer groups").with_keys(&[
                "groups",
                "groups.exclude",
                "replication.policy.class",
                "target.cluster.alias",
                "emit.checkpoints.interval.seconds",
                "sync.group.offsets.enabled",
                "refresh.groups.interval.seconds",
            ])),
        )
        .step(review_step())
        .wizard_hook(credentials::mirror_sasl_fields)
        .wizard_hook(visibility::mirror_sasl)
        .submission_hook(credentials::mirror_sasl_jaas)
}

fn mirror_heartbeat() -> WizardGuide {
    WizardGuide::new()
        .step(
            WizardStep::new("Connector properties").with_group(WizardGroup::unnamed().with_keys(&[
                "source.cluster.alias",
                "target.cluster.alias",
                "emit.heartbeats.interval.seconds",
                "heartbeats.topic.replication.factor",
            ])),
        )
        .step(review_step())
}

// =============================================================================
// Table formats
// =============================================================================

fn iceberg_sink() -> WizardGuide {
    WizardGuide::new()
        .sink()
        .step(
            WizardStep::new("Connection").with_group(WizardGroup::new("Catalog").with_keys(&[
                "iceberg.catalog.type",
                "iceberg.catalog.uri",
                "iceberg.catalog.credential",
                "iceberg.catalog.token",
                "iceberg.catalog.oauth2-server-uri",
                "iceberg.catalog.scope",
                "iceberg.catalog.warehouse",
            ])),
        )
        .step(topics_step())
        .step(sink_properties(&[
            "iceberg.tables",
            "iceberg.tables.auto-create-enabled",
            "iceberg.tables.evolve-schema-enabled",
            "iceberg.control.commit.interval-ms",
        ]))
        .step(review_step())
        .wizard_hook(converters::json_schema_toggles)
}

/// Built-in guides keyed by plugin class
pub fn builtin_guides() -> Vec<(&'static str, WizardGuide)> {
    vec![
        (S3_SINK, s3_sink()),
        (GCS_SINK, gcs_sink()),
        (JDBC_SOURCE, jdbc_source()),
        (JDBC_SINK, jdbc_sink()),
        (MONGODB_SOURCE, mongodb_source()),
        (MONGODB_SINK, mongodb_sink()),
        (BIGQUERY_SINK, bigquery_sink()),
        (SNOWFLAKE_SINK, snowflake_sink()),
        (HTTP_SOURCE, http_source()),
        (MIRROR_SOURCE, mirror_source()),
        (MIRROR_CHECKPOINT, mirror_checkpoint()),
        (MIRROR_HEARTBEAT, mirror_heartbeat()),
        (ICEBERG_SINK, iceberg_sink()),
        (TABULAR_ICEBERG_SINK, iceberg_sink()),
    ]
}
