//! Relational (JDBC) and document store (MongoDB) connectors

use super::{FieldPatch, KeyTableRule, PatchRule};
use crate::error::Result;
use crate::model::{ComponentType, ConfigType, Importance};
use crate::plugins::{JDBC_SINK, JDBC_SOURCE, MONGODB_SINK, MONGODB_SOURCE};

fn jdbc_shared_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "connection.url",
            FieldPatch::new()
                .display_name("JDBC URL")
                .documentation(
                    "JDBC connection URL, for example: \
                     `jdbc:postgresql://localhost:5432/database` or \
                     `jdbc:mysql://localhost:3306/database`.",
                )
                .importance(Importance::High)
                .required(true),
        ),
        (
            "connection.user",
            FieldPatch::new()
                .display_name("User")
                .importance(Importance::High),
        ),
        (
            "connection.password",
            FieldPatch::new()
                .display_name("Password")
                .importance(Importance::High)
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "connection.attempts",
            FieldPatch::new()
                .display_name("Connection attempts")
                .default_value("3")
                .importance(Importance::Low),
        ),
    ]
}

fn jdbc_source_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "mode",
            FieldPatch::new()
                .display_name("Table loading mode")
                .documentation(
                    "The mode for updating a table each time it is polled. `bulk` performs a \
                     bulk load of the entire table each time it is polled; `incrementing` uses \
                     a strictly incrementing column to detect new rows; `timestamp` uses a \
                     timestamp column to detect new and modified rows; `timestamp+incrementing` \
                     combines both.",
                )
                .importance(Importance::High)
                .default_value("bulk")
                .options(&[
                    ("bulk", "Bulk"),
                    ("incrementing", "Incrementing"),
                    ("timestamp", "Timestamp"),
                    ("timestamp+incrementing", "Timestamp and incrementing"),
                ])
                .component(ComponentType::RadioGroup),
        ),
        (
            "incrementing.column.name",
            FieldPatch::new().display_name("Incrementing column name"),
        ),
        (
            "timestamp.column.name",
            FieldPatch::new().display_name("Timestamp column names"),
        ),
        (
            "table.whitelist",
            FieldPatch::new()
                .display_name("Tables to include")
                .documentation("Comma-separated list of tables to include in copying."),
        ),
        (
            "table.blacklist",
            FieldPatch::new()
                .display_name("Tables to exclude")
                .documentation("Comma-separated list of tables to exclude from copying."),
        ),
        (
            "topic.prefix",
            FieldPatch::new()
                .display_name("Topic prefix")
                .documentation(
                    "Prefix to prepend to table names to generate the name of the topic \
                     to publish data to.",
                )
                .importance(Importance::High)
                .required(true),
        ),
        (
            "poll.interval.ms",
            FieldPatch::new()
                .display_name("Poll interval")
                .documentation("Frequency in milliseconds to poll for new data in each table.")
                .default_value("5000"),
        ),
        (
            "batch.max.rows",
            FieldPatch::new()
                .display_name("Max rows per batch")
                .default_value("100"),
        ),
        (
            "query",
            FieldPatch::new()
                .display_name("Custom query")
                .documentation(
                    "If specified, the query to perform to select new or updated rows \
                     instead of copying whole tables.",
                )
                .component(ComponentType::TextArea),
        ),
    ]
}

fn jdbc_sink_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "insert.mode",
            FieldPatch::new()
                .display_name("Insert mode")
                .importance(Importance::High)
                .default_value("insert")
                .options(&[
                    ("insert", "INSERT"),
                    ("upsert", "UPSERT"),
                    ("update", "UPDATE"),
                ])
                .component(ComponentType::RadioGroup),
        ),
        (
            "pk.mode",
            FieldPatch::new()
                .display_name("Primary key mode")
                .default_value("none")
                .options(&[
                    ("none", "None"),
                    ("kafka", "Kafka coordinates"),
                    ("record_key", "Record key"),
                    ("record_value", "Record value"),
                ]),
        ),
        ("pk.fields", FieldPatch::new().display_name("Primary key fields")),
        (
            "auto.create",
            FieldPatch::new()
                .display_name("Auto-create tables")
                .default_value("false"),
        ),
        (
            "auto.evolve",
            FieldPatch::new()
                .display_name("Auto-add columns")
                .default_value("false"),
        ),
        (
            "table.name.format",
            FieldPatch::new()
                .display_name("Table name format")
                .documentation(
                    "A format string for the destination table name, which may contain \
                     `${topic}` as a placeholder for the originating topic name.",
                )
                .default_value("${topic}"),
        ),
        (
            "batch.size",
            FieldPatch::new()
                .display_name("Batch size")
                .default_value("3000"),
        ),
        (
            "delete.enabled",
            FieldPatch::new()
                .display_name("Delete on null values")
                .default_value("false"),
        ),
    ]
}

fn mongodb_shared_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "connection.uri",
            FieldPatch::new()
                .display_name("MongoDB connection URI")
                .documentation(
                    "The connection URI as supported by the official drivers, \
                     for example: `mongodb://user@localhost:27017/`.",
                )
                .config_type(ConfigType::Password),
        ),
        (
            "database",
            FieldPatch::new()
                .display_name("Database")
                .importance(Importance::High),
        ),
        (
            "collection",
            FieldPatch::new()
                .display_name("Collection")
                .importance(Importance::High),
        ),
    ]
}

fn mongodb_source_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "topic.prefix",
            FieldPatch::new()
                .display_name("Topic prefix")
                .documentation("Prefix to prepend to database and collection names."),
        ),
        (
            "output.format.key",
            FieldPatch::new()
                .display_name("Kafka message key format")
                .default_value("json")
                .options(&[("json", "JSON"), ("bson", "BSON"), ("schema", "SCHEMA")])
                .component(ComponentType::RadioGroup),
        ),
        (
            "output.format.value",
            FieldPatch::new()
                .display_name("Kafka message value format")
                .default_value("json")
                .options(&[("json", "JSON"), ("bson", "BSON"), ("schema", "SCHEMA")])
                .component(ComponentType::RadioGroup),
        ),
        (
            "startup.mode",
            FieldPatch::new()
                .display_name("Start-up mode")
                .documentation(
                    "Whether to start from the current change stream position (`latest`), \
                     a given timestamp, or copy existing data first (`copy_existing`).",
                )
                .default_value("latest")
                .options(&[
                    ("latest", "Latest"),
                    ("timestamp", "Timestamp"),
                    ("copy_existing", "Copy existing"),
                ]),
        ),
        (
            "publish.full.document.only",
            FieldPatch::new()
                .display_name("Publish full document only")
                .default_value("false"),
        ),
        (
            "pipeline",
            FieldPatch::new()
                .display_name("Pipeline")
                .documentation("An array of objects describing the change stream pipeline.")
                .default_value("[]")
                .component(ComponentType::Json),
        ),
    ]
}

fn mongodb_sink_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "document.id.strategy",
            FieldPatch::new()
                .display_name("Document ID strategy")
                .default_value("com.mongodb.kafka.connect.sink.processor.id.strategy.BsonOidStrategy")
                .options(&[
                    (
                        "com.mongodb.kafka.connect.sink.processor.id.strategy.BsonOidStrategy",
                        "BSON ObjectId",
                    ),
                    (
                        "com.mongodb.kafka.connect.sink.processor.id.strategy.ProvidedInKeyStrategy",
                        "Provided in key",
                    ),
                    (
                        "com.mongodb.kafka.connect.sink.processor.id.strategy.ProvidedInValueStrategy",
                        "Provided in value",
                    ),
                    (
                        "com.mongodb.kafka.connect.sink.processor.id.strategy.UuidStrategy",
                        "UUID",
                    ),
                ]),
        ),
        (
            "writemodel.strategy",
            FieldPatch::new()
                .display_name("Write model strategy")
                .importance(Importance::Low),
        ),
        (
            "max.batch.size",
            FieldPatch::new()
                .display_name("Max batch size")
                .default_value("0"),
        ),
        (
            "delete.on.null.values",
            FieldPatch::new()
                .display_name("Delete on null values")
                .default_value("false"),
        ),
    ]
}

/// Database connector rules, in order
pub fn rules() -> Result<Vec<Box<dyn PatchRule>>> {
    Ok(vec![
        Box::new(KeyTableRule::for_plugins(
            "jdbc",
            &[JDBC_SOURCE, JDBC_SINK],
            jdbc_shared_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "jdbc-source",
            &[JDBC_SOURCE],
            jdbc_source_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "jdbc-sink",
            &[JDBC_SINK],
            jdbc_sink_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "mongodb",
            &[MONGODB_SOURCE, MONGODB_SINK],
            mongodb_shared_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "mongodb-source",
            &[MONGODB_SOURCE],
            mongodb_source_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "mongodb-sink",
            &[MONGODB_SINK],
            mongodb_sink_table(),
        )?),
    ])
}
