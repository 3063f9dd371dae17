//! Cluster mirroring: MirrorMaker 2 source, checkpoint and heartbeat connectors

use super::{FieldPatch, KeyTableRule, PatchRule};
use crate::error::Result;
use crate::model::{ComponentType, Importance};
use crate::plugins::{MIRROR_CHECKPOINT, MIRROR_HEARTBEAT, MIRROR_SOURCE};

const SECURITY_PROTOCOLS: &[(&str, &str)] = &[
    ("PLAINTEXT", "PLAINTEXT"),
    ("SSL", "SSL"),
    ("SASL_PLAINTEXT", "SASL_PLAINTEXT"),
    ("SASL_SSL", "SASL_SSL"),
];

fn mirror_shared_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "source.cluster.alias",
            FieldPatch::new()
                .display_name("Source cluster alias")
                .documentation(
                    "When using the default replication policy, topic names in the target \
                     cluster are prefixed with the source cluster alias.",
                )
                .default_value("source"),
        ),
        (
            "source.cluster.bootstrap.servers",
            FieldPatch::new()
                .display_name("Source cluster broker list")
                .documentation(
                    "A comma-separated list of host:port pairs of the source cluster brokers.",
                )
                .importance(Importance::High)
                .required(true),
        ),
        (
            "source.cluster.security.protocol",
            FieldPatch::new()
                .display_name("Source cluster security protocol")
                .default_value("PLAINTEXT")
                .importance(Importance::High)
                .options(SECURITY_PROTOCOLS)
                .component(ComponentType::RadioGroup),
        ),
        (
            "source.cluster.sasl.mechanism",
            FieldPatch::new()
                .display_name("Source cluster SASL mechanism")
                .default_value("PLAIN")
                .options(&[
                    ("PLAIN", "PLAIN"),
                    ("SCRAM-SHA-256", "SCRAM-SHA-256"),
                    ("SCRAM-SHA-512", "SCRAM-SHA-512"),
                ])
                .component(ComponentType::RadioGroup),
        ),
        (
            "source.cluster.sasl.jaas.config",
            FieldPatch::new()
                .display_name("Source cluster SASL JAAS config")
                .importance(Importance::Low),
        ),
        (
            "target.cluster.alias",
            FieldPatch::new()
                .display_name("Target cluster alias")
                .default_value("target")
                .importance(Importance::Low),
        ),
        (
            "replication.policy.class",
            FieldPatch::new()
                .display_name("Replication policy")
                .documentation(
                    "The default policy prefixes remote topic names with the source cluster \
                     alias; the identity policy keeps topic names unchanged.",
                )
                .default_value("org.apache.kafka.connect.mirror.IdentityReplicationPolicy")
                .options(&[
                    (
                        "org.apache.kafka.connect.mirror.DefaultReplicationPolicy",
                        "Default",
                    ),
                    (
                        "org.apache.kafka.connect.mirror.IdentityReplicationPolicy",
                        "Identity",
                    ),
                ])
                .component(ComponentType::RadioGroup),
        ),
    ]
}

fn mirror_source_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "topics",
            FieldPatch::new()
                .display_name("Topics to replicate")
                .documentation(
                    "Topic names and/or regular expressions of the source cluster topics \
                     to replicate, comma-separated.",
                )
                .default_value(".*")
                .importance(Importance::High),
        ),
        (
            "topics.exclude",
            FieldPatch::new()
                .display_name("Topics to exclude")
                .documentation("Topic names and/or regular expressions to exclude."),
        ),
        (
            "replication.factor",
            FieldPatch::new()
                .display_name("Replication factor")
                .documentation(
                    "Replication factor for newly created remote topics. \
                     -1 uses the target cluster default.",
                )
                .default_value("-1"),
        ),
        (
            "sync.topic.configs.enabled",
            FieldPatch::new()
                .display_name("Sync topic configs")
                .default_value("true"),
        ),
        (
            "sync.topic.acls.enabled",
            FieldPatch::new()
                .display_name("Sync topic ACLs")
                .default_value("false"),
        ),
        (
            "offset-syncs.topic.location",
            FieldPatch::new()
                .display_name("Offset syncs topic location")
                .default_value("target")
                .options(&[("source", "source"), ("target", "target")])
                .importance(Importance::Low),
        ),
    ]
}

fn mirror_checkpoint_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "groups",
            FieldPatch::new()
                .display_name("Consumer groups to replicate")
                .documentation("Consumer group ids and/or regular expressions, comma-separated.")
                .default_value(".*")
                .importance(Importance::High),
        ),
        (
            "groups.exclude",
            FieldPatch::new().display_name("Consumer groups to exclude"),
        ),
        (
            "emit.checkpoints.interval.seconds",
            FieldPatch::new()
                .display_name("Checkpoint interval")
                .documentation("Frequency of checkpoints, in seconds.")
                .default_value("60"),
        ),
        (
            "sync.group.offsets.enabled",
            FieldPatch::new()
                .display_name("Sync consumer group offsets")
                .default_value("true"),
        ),
        (
            "refresh.groups.interval.seconds",
            FieldPatch::new()
                .display_name("Refresh groups interval")
                .default_value("600")
                .importance(Importance::Low),
        ),
    ]
}

fn mirror_heartbeat_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "emit.heartbeats.interval.seconds",
            FieldPatch::new()
                .display_name("Heartbeat interval")
                .documentation("Frequency of heartbeats, in seconds.")
                .default_value("1"),
        ),
        (
            "heartbeats.topic.replication.factor",
            FieldPatch::new()
                .display_name("Heartbeats topic replication factor")
                .default_value("-1"),
        ),
    ]
}

/// Mirror connector rules, in order
pub fn rules() -> Result<Vec<Box<dyn PatchRule>>> {
    Ok(vec![
        Box::new(KeyTableRule::for_plugins(
            "mirror",
            &[MIRROR_SOURCE, MIRROR_CHECKPOINT, MIRROR_HEARTBEAT],
            mirror_shared_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "mirror-source",
            &[MIRROR_SOURCE],
            mirror_source_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "mirror-checkpoint",
            &[MIRROR_CHECKPOINT],
            mirror_checkpoint_table(),
        )?),
        Box::new(KeyTableRule::for_plugins(
            "mirror-heartbeat",
            &[MIRROR_HEARTBEAT],
            mirror_heartbeat_table(),
        )?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigMap, ConfigType, ConfigurationEntry};
    use crate::patch::{PatchContext, apply_rules, builtin_rules};

    #[test]
    fn test_mirror_topics_override_common() {
        let rules = builtin_rules().unwrap();
        let values = ConfigMap::new();
        let ctx = PatchContext::new(MIRROR_SOURCE, &values);
        let entry = apply_rules(&rules, ConfigurationEntry::new("topics", ConfigType::List), &ctx);
        assert_eq!(entry.definition.display_name.as_deref(), Some("Topics to replicate"));
        assert_eq!(entry.current_str().as_deref(), Some(".*"));
    }

    #[test]
    fn test_heartbeat_does_not_get_source_keys() {
        let rules = rules().unwrap();
        assert!(!rules.iter().any(|r| r.is_match("topics.exclude", MIRROR_HEARTBEAT)));
        assert!(rules.iter().any(|r| r.is_match("source.cluster.alias", MIRROR_HEARTBEAT)));
    }
}
