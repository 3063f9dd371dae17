//! Random default connector names

use uuid::Uuid;

use super::{PatchContext, PatchRule};
use crate::error::Result;
use crate::model::ConfigurationEntry;
use crate::selector::Selector;

const NAME_KEY: &str = "name";
const SUFFIX_LEN: usize = 4;

/// Generate `<family>-connector-<4 random lowercase alphanumerics>`
pub fn random_connector_name(family: &str) -> String {
    let uuid = Uuid::new_v4();
    format!("{}-connector-{}", family, alphanumeric(&uuid.as_bytes()[..SUFFIX_LEN]))
}

const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// One character of `[a-z0-9]` per input byte
fn alphanumeric(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| char::from(ALPHABET[usize::from(*b) % ALPHABET.len()]))
        .collect()
}

/// Suggests a connector name for supported families when none is set
pub struct ConnectorNameRule {
    families: Vec<(Selector, &'static str)>,
}

impl ConnectorNameRule {
    /// Create a rule from `(plugin class, family)` pairs
    pub fn new(families: &[(&str, &'static str)]) -> Result<Self> {
        let families = families
            .iter()
            .map(|(class, family)| Ok((Selector::exact(class)?, *family)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { families })
    }

    fn family(&self, plugin_class: &str) -> Option<&'static str> {
        self.families
            .iter()
            .find(|(selector, _)| selector.is_match(plugin_class))
            .map(|(_, family)| *family)
    }
}

impl PatchRule for ConnectorNameRule {
    fn name(&self) -> &str {
        "connector-name"
    }

    fn is_match(&self, key: &str, plugin_class: &str) -> bool {
        key == NAME_KEY && self.family(plugin_class).is_some()
    }

    fn apply(&self, entry: ConfigurationEntry, ctx: &PatchContext<'_>) -> ConfigurationEntry {
        if !entry.is_unset() {
            return entry;
        }
        match self.family(ctx.plugin_class) {
            Some(family) => entry.with_default_value(random_connector_name(family)),
            None => entry,
        }
    }
}
