//! Human display names derived from dotted configuration keys

use phf::{phf_map, phf_set};

use super::{PatchContext, PatchRule};
use crate::error::Result;
use crate::model::ConfigurationEntry;
use crate::selector::Selector;

/// Words rendered fully upper-case
static ABBREVIATIONS: phf::Set<&'static str> = phf_set! {
    "api", "aws", "cdc", "csv", "db", "ddl", "gcs", "http", "https", "iam", "id",
    "jaas", "jdbc", "json", "kms", "s3", "sasl", "sql", "ssh", "ssl", "tcp", "tls",
    "uri", "url",
};

/// Words replaced by a friendlier spelling
static REPLACEMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "ms" => "milliseconds",
    "num" => "number",
    "oauth" => "OAuth",
    "mongodb" => "MongoDB",
    "bigquery" => "BigQuery",
    "snowflake" => "Snowflake",
    "iceberg" => "Iceberg",
    "gcp" => "GCP",
};

/// Turn `source.cluster.sasl.mechanism` into `Source cluster SASL mechanism`
pub fn key_to_display_name(key: &str) -> String {
    key.split(['.', '_', '-'])
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if let Some(replacement) = REPLACEMENTS.get(lower.as_str()) {
                if i == 0 {
                    capitalize(replacement)
                } else {
                    replacement.to_string()
                }
            } else if ABBREVIATIONS.contains(lower.as_str()) {
                lower.to_uppercase()
            } else if i == 0 {
                capitalize(&lower)
            } else {
                lower
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fills in a display name wherever the plugin did not author one
pub struct DisplayNameRule {
    selector: Selector,
}

impl DisplayNameRule {
    /// Rule applying to every key of every plugin
    pub fn new() -> Result<Self> {
        Ok(Self {
            selector: Selector::all()?,
        })
    }
}

impl PatchRule for DisplayNameRule {
    fn name(&self) -> &str {
        "display-name"
    }

    fn is_match(&self, key: &str, plugin_class: &str) -> bool {
        self.selector.is_match(key) && self.selector.is_match(plugin_class)
    }

    fn apply(&self, entry: ConfigurationEntry, _ctx: &PatchContext<'_>) -> ConfigurationEntry {
        let authored = entry
            .definition
            .display_name
            .as_deref()
            .is_some_and(|name| !name.is_empty() && name != entry.name());
        if authored {
            return entry;
        }
        let display_name = key_to_display_name(entry.name());
        entry.with_display_name(display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigMap, ConfigType};
    use rstest::rstest;

    #[rstest]
    #[case("tasks.max", "Tasks max")]
    #[case("source.cluster.sasl.mechanism", "Source cluster SASL mechanism")]
    #[case("ssl.truststore.location", "SSL truststore location")]
    #[case("aws.access.key.id", "AWS access key ID")]
    #[case("poll.interval.ms", "Poll interval milliseconds")]
    #[case("key.converter.schemas.enable", "Key converter schemas enable")]
    #[case("format.output.fields.value.encoding", "Format output fields value encoding")]
    #[case("offset-syncs.topic.location", "Offset syncs topic location")]
    #[case("ms.before.retry", "Milliseconds before retry")]
    #[case("iceberg.catalog.oauth2-server-uri", "Iceberg catalog oauth2 server URI")]
    #[case("autoCreateTables", "Autocreatetables")]
    fn test_key_to_display_name(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(key_to_display_name(key), expected);
    }

    #[test]
    fn test_authored_display_name_kept() {
        let rule = DisplayNameRule::new().unwrap();
        let values = ConfigMap::new();
        let ctx = PatchContext::new("p", &values);
        let entry = ConfigurationEntry::new("tasks.max", ConfigType::Int)
            .with_display_name("Maximum tasks");
        let patched = rule.apply(entry, &ctx);
        assert_eq!(patched.definition.display_name.as_deref(), Some("Maximum tasks"));
    }

    #[test]
    fn test_display_name_equal_to_key_is_replaced() {
        let rule = DisplayNameRule::new().unwrap();
        let values = ConfigMap::new();
        let ctx = PatchContext::new("p", &values);
        let entry =
            ConfigurationEntry::new("topics.regex", ConfigType::String).with_display_name("topics.regex");
        let patched = rule.apply(entry, &ctx);
        assert_eq!(patched.definition.display_name.as_deref(), Some("Topics regex"));
    }
}
