//! Apache Iceberg table-format sink

use super::{FieldPatch, KeyTableRule, PatchContext, PatchRule};
use crate::error::Result;
use crate::model::{ComponentType, ConfigType, ConfigurationEntry, Importance};
use crate::plugins::{ICEBERG_SINK, TABULAR_ICEBERG_SINK};
use crate::selector::Selector;

/// Key selecting the catalog implementation
pub const CATALOG_TYPE: &str = "iceberg.catalog.type";

const DEFAULT_CATALOG_TYPE: &str = "rest";

/// Keys only meaningful for a REST catalog
pub const REST_CATALOG_KEYS: &[&str] = &[
    "iceberg.catalog.uri",
    "iceberg.catalog.credential",
    "iceberg.catalog.token",
    "iceberg.catalog.oauth2-server-uri",
    "iceberg.catalog.scope",
];

fn iceberg_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            CATALOG_TYPE,
            FieldPatch::new()
                .display_name("Iceberg catalog type")
                .importance(Importance::High)
                .default_value(DEFAULT_CATALOG_TYPE)
                .options(&[
                    ("rest", "REST"),
                    ("hive", "Hive"),
                    ("hadoop", "Hadoop"),
                    ("glue", "AWS Glue"),
                    ("nessie", "Nessie"),
                ])
                .component(ComponentType::RadioGroup),
        ),
        (
            "iceberg.catalog.uri",
            FieldPatch::new()
                .display_name("Iceberg catalog URI")
                .documentation("URI of the REST catalog service.")
                .importance(Importance::High),
        ),
        (
            "iceberg.catalog.credential",
            FieldPatch::new()
                .display_name("Iceberg catalog credential")
                .documentation(
                    "Credential in the form `client_id:client_secret` exchanged for a token \
                     with the OAuth2 server.",
                )
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "iceberg.catalog.token",
            FieldPatch::new()
                .display_name("Iceberg catalog token")
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "iceberg.catalog.oauth2-server-uri",
            FieldPatch::new().display_name("Iceberg catalog OAuth2 server URI"),
        ),
        (
            "iceberg.catalog.warehouse",
            FieldPatch::new()
                .display_name("Iceberg catalog warehouse")
                .documentation("Warehouse location or identifier, for example `s3://bucket/path`."),
        ),
        (
            "iceberg.tables",
            FieldPatch::new()
                .display_name("Iceberg tables")
                .documentation("Comma-separated list of destination tables, `namespace.table`.")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "iceberg.tables.auto-create-enabled",
            FieldPatch::new()
                .display_name("Auto-create tables")
                .default_value("false"),
        ),
        (
            "iceberg.tables.evolve-schema-enabled",
            FieldPatch::new()
                .display_name("Evolve schema")
                .default_value("false"),
        ),
        (
            "iceberg.control.commit.interval-ms",
            FieldPatch::new()
                .display_name("Commit interval")
                .documentation("Interval between table commits, in milliseconds.")
                .default_value("300000"),
        ),
    ]
}

/// Shows REST catalog keys only when the catalog type is `rest`
pub struct CatalogVisibilityRule {
    keys: Selector,
    plugins: Selector,
}

impl CatalogVisibilityRule {
    /// Rule for both Iceberg sink distributions
    pub fn new() -> Result<Self> {
        Ok(Self {
            keys: Selector::any_of(REST_CATALOG_KEYS)?,
            plugins: Selector::any_of(&[ICEBERG_SINK, TABULAR_ICEBERG_SINK])?,
        })
    }
}

impl PatchRule for CatalogVisibilityRule {
    fn name(&self) -> &str {
        "iceberg-catalog-visibility"
    }

    fn is_match(&self, key: &str, plugin_class: &str) -> bool {
        self.plugins.is_match(plugin_class) && self.keys.is_match(key)
    }

    fn apply(&self, entry: ConfigurationEntry, ctx: &PatchContext<'_>) -> ConfigurationEntry {
        let catalog_type = ctx
            .value_str(CATALOG_TYPE)
            .unwrap_or_else(|| DEFAULT_CATALOG_TYPE.to_string());
        entry.with_visible(catalog_type.eq_ignore_ascii_case("rest"))
    }
}

/// Iceberg rules, in order
pub fn rules() -> Result<Vec<Box<dyn PatchRule>>> {
    Ok(vec![
        Box::new(KeyTableRule::for_plugins(
            "iceberg-sink",
            &[ICEBERG_SINK, TABULAR_ICEBERG_SINK],
            iceberg_table(),
        )?),
        Box::new(CatalogVisibilityRule::new()?),
    ])
}
