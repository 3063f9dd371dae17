//! Plugin classes with dedicated rules and guides
//!
//! Each supported connector family is listed with the slug used for
//! generated connector names.

/// AWS S3 sink
pub const S3_SINK: &str = "com.redpanda.kafka.connect.s3.S3SinkConnector";
/// Google Cloud Storage sink
pub const GCS_SINK: &str = "com.redpanda.kafka.connect.gcs.GcsSinkConnector";
/// JDBC source
pub const JDBC_SOURCE: &str = "com.redpanda.kafka.connect.jdbc.JdbcSourceConnector";
/// JDBC sink
pub const JDBC_SINK: &str = "com.redpanda.kafka.connect.jdbc.JdbcSinkConnector";
/// MongoDB source
pub const MONGODB_SOURCE: &str = "com.mongodb.kafka.connect.MongoSourceConnector";
/// MongoDB sink
pub const MONGODB_SINK: &str = "com.mongodb.kafka.connect.MongoSinkConnector";
/// Google BigQuery sink
pub const BIGQUERY_SINK: &str = "com.wepay.kafka.connect.bigquery.BigQuerySinkConnector";
/// Snowflake sink
pub const SNOWFLAKE_SINK: &str = "com.snowflake.kafka.connector.SnowflakeSinkConnector";
/// HTTP source
pub const HTTP_SOURCE: &str = "com.github.castorm.kafka.connect.http.HttpSourceConnector";
/// MirrorMaker 2 source
pub const MIRROR_SOURCE: &str = "org.apache.kafka.connect.mirror.MirrorSourceConnector";
/// MirrorMaker 2 checkpoint
pub const MIRROR_CHECKPOINT: &str = "org.apache.kafka.connect.mirror.MirrorCheckpointConnector";
/// MirrorMaker 2 heartbeat
pub const MIRROR_HEARTBEAT: &str = "org.apache.kafka.connect.mirror.MirrorHeartbeatConnector";
/// Apache Iceberg sink
pub const ICEBERG_SINK: &str = "org.apache.iceberg.connect.IcebergSinkConnector";
/// Apache Iceberg sink, Tabular distribution
pub const TABULAR_ICEBERG_SINK: &str = "io.tabular.iceberg.connect.IcebergSinkConnector";

/// Plugin class → family slug
pub const FAMILIES: &[(&str, &str)] = &[
    (S3_SINK, "s3"),
    (GCS_SINK, "gcs"),
    (JDBC_SOURCE, "jdbc-source"),
    (JDBC_SINK, "jdbc-sink"),
    (MONGODB_SOURCE, "mongodb-source"),
    (MONGODB_SINK, "mongodb-sink"),
    (BIGQUERY_SINK, "bigquery"),
    (SNOWFLAKE_SINK, "snowflake"),
    (HTTP_SOURCE, "http-source"),
    (MIRROR_SOURCE, "mirror-source"),
    (MIRROR_CHECKPOINT, "mirror-checkpoint"),
    (MIRROR_HEARTBEAT, "mirror-heartbeat"),
    (ICEBERG_SINK, "iceberg"),
    (TABULAR_ICEBERG_SINK, "iceberg"),
];

/// Family slug of a plugin class
pub fn family(plugin_class: &str) -> Option<&'static str> {
    FAMILIES
        .iter()
        .find(|(class, _)| *class == plugin_class)
        .map(|(_, family)| *family)
}

/// Converter classes shared by rules and hooks
pub mod converters {
    /// Raw bytes
    pub const BYTE_ARRAY: &str = "org.apache.kafka.connect.converters.ByteArrayConverter";
    /// UTF-8 strings
    pub const STRING: &str = "org.apache.kafka.connect.storage.StringConverter";
    /// JSON, with optional embedded schema
    pub const JSON: &str = "org.apache.kafka.connect.json.JsonConverter";
    /// Avro via schema registry
    pub const AVRO: &str = "io.confluent.connect.avro.AvroConverter";
    /// CloudEvents envelope
    pub const CLOUD_EVENTS: &str = "io.debezium.converters.CloudEventsConverter";
    /// Snowflake JSON
    pub const SNOWFLAKE_JSON: &str = "com.snowflake.kafka.connector.records.SnowflakeJsonConverter";
    /// Snowflake Avro with schema registry
    pub const SNOWFLAKE_AVRO: &str = "com.snowflake.kafka.connector.records.SnowflakeAvroConverter";
}
