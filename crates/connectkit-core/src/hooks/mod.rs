//! Hooks composed inside guides
//!
//! Hooks are plain functions, called in a fixed order by the guide that lists
//! them, so later hooks can rely on entries injected by earlier ones.
//!
//! - [`WizardHook`]s run on the read path: they inject entries the framework
//!   does not expose and compute cross-field visibility or errors.
//! - [`SubmissionHook`]s run on the write path: they derive composite values
//!   (JAAS configs, connection URIs) from user-facing fields.
//!
//! A controlling key is looked up in the submitted map first, then in the
//! entry list (current value, then default). A key found in neither makes the
//! condition false.

use crate::config::is_blank;
use crate::error::Result;
use crate::model::{ConfigMap, ConfigurationEntry, scalar_to_string};

pub mod converters;
pub mod credentials;
pub mod topic_creation;
pub mod visibility;

/// Read-path hook
pub type WizardHook = fn(Vec<ConfigurationEntry>, &ConfigMap) -> Vec<ConfigurationEntry>;

/// Write-path hook
pub type SubmissionHook = fn(ConfigMap) -> Result<ConfigMap>;

/// Current value of `key`, from the submitted map or the entry list
pub fn lookup(entries: &[ConfigurationEntry], config: &ConfigMap, key: &str) -> Option<String> {
    config.get(key).and_then(scalar_to_string).or_else(|| {
        entries
            .iter()
            .find(|e| e.name() == key)
            .and_then(ConfigurationEntry::effective_str)
    })
}

/// Append `entry` unless an entry with the same key already exists
///
/// The injected entry takes its current value from the submitted map.
pub fn inject(
    mut entries: Vec<ConfigurationEntry>,
    entry: ConfigurationEntry,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    if entries.iter().any(|e| e.name() == entry.name()) {
        return entries;
    }
    let entry = match config.get(entry.name()) {
        Some(value) if !is_blank(value) => entry.with_value(value.clone()),
        _ => entry,
    };
    tracing::debug!(key = entry.name(), "injecting configuration entry");
    entries.push(entry);
    entries
}

/// Set the visibility of every entry named in `keys`
pub fn set_visible(
    entries: Vec<ConfigurationEntry>,
    keys: &[&str],
    visible: bool,
) -> Vec<ConfigurationEntry> {
    entries
        .into_iter()
        .map(|e| {
            if keys.contains(&e.name()) {
                e.with_visible(visible)
            } else {
                e
            }
        })
        .collect()
}
