//! Cross-field visibility and validation

use super::{lookup, set_visible};
use crate::model::{ConfigMap, ConfigurationEntry};
use crate::plugins::converters::STRING;

/// Error attached to `value.converter` for streaming Snowflake ingestion
pub const SNOWPIPE_STREAMING_CONVERTER_ERROR: &str = "Only org.apache.kafka.connect.storage.StringConverter is supported as value converter for SNOWPIPE_STREAMING ingestion";

const SNOWFLAKE_INGESTION_METHOD: &str = "snowflake.ingestion.method";
const SNOWPIPE_STREAMING: &str = "snowpipe_streaming";
const VALUE_CONVERTER: &str = "value.converter";

/// `avro.codec` is only meaningful for Avro output
pub fn avro_codec(entries: Vec<ConfigurationEntry>, config: &ConfigMap) -> Vec<ConfigurationEntry> {
    let is_avro = lookup(&entries, config, "format.output.type").as_deref() == Some("avro");
    set_visible(entries, &["avro.codec"], is_avro)
}

/// Basic auth credentials of the HTTP source
pub fn http_basic_auth(
    entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    let is_basic = lookup(&entries, config, "http.auth.type").as_deref() == Some("Basic");
    set_visible(entries, &["http.auth.user", "http.auth.password"], is_basic)
}

/// SASL settings of the mirrored source cluster
pub fn mirror_sasl(entries: Vec<ConfigurationEntry>, config: &ConfigMap) -> Vec<ConfigurationEntry> {
    let is_sasl = lookup(&entries, config, "source.cluster.security.protocol")
        .is_some_and(|protocol| protocol.starts_with("SASL_"));
    entries
        .into_iter()
        .map(|e| {
            if e.name().starts_with("source.cluster.sasl.") {
                e.with_visible(is_sasl)
            } else {
                e
            }
        })
        .collect()
}

/// Streaming ingestion requires the string value converter
pub fn snowflake_streaming_converter(
    entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    let streaming = lookup(&entries, config, SNOWFLAKE_INGESTION_METHOD)
        .is_some_and(|method| method.eq_ignore_ascii_case(SNOWPIPE_STREAMING));
    let converter = lookup(&entries, config, VALUE_CONVERTER);
    let violated = streaming && converter.as_deref().is_some_and(|c| c != STRING);
    if !violated {
        return entries;
    }

    entries
        .into_iter()
        .map(|e| {
            let already_reported = e
                .value
                .errors
                .iter()
                .any(|err| err == SNOWPIPE_STREAMING_CONVERTER_ERROR);
            if e.name() == VALUE_CONVERTER && !already_reported {
                e.with_error(SNOWPIPE_STREAMING_CONVERTER_ERROR)
            } else {
                e
            }
        })
        .collect()
}
