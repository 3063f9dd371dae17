//! Wizard structures: steps, groups and the final response

use serde::{Deserialize, Serialize};

use super::ConfigurationEntry;

/// A group of configuration keys rendered together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardGroup {
    /// Group title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link to external documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<String>,

    /// Keys in render order
    #[serde(default)]
    pub config_keys: Vec<String>,
}

impl WizardGroup {
    /// Create a named group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Create a group without a title
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the documentation link
    pub fn with_documentation_link(mut self, link: impl Into<String>) -> Self {
        self.documentation_link = Some(link.into());
        self
    }

    /// Set the keys
    pub fn with_keys(mut self, keys: &[&str]) -> Self {
        self.config_keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }
}

/// One page of the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardStep {
    /// Step title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Groups in render order
    #[serde(default)]
    pub groups: Vec<WizardGroup>,
}

impl WizardStep {
    /// Create a named step
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a group
    pub fn with_group(mut self, group: WizardGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// All keys referenced by the step, in order
    pub fn config_keys(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.config_keys.iter().map(String::as_str))
    }
}

/// Final wizard description for one plugin class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardResponse {
    /// Plugin class name
    pub name: String,

    /// Patched entries
    pub configs: Vec<ConfigurationEntry>,

    /// Steps in render order
    pub steps: Vec<WizardStep>,
}

impl WizardResponse {
    /// Look up an entry by key
    pub fn entry(&self, key: &str) -> Option<&ConfigurationEntry> {
        self.configs.iter().find(|c| c.name() == key)
    }

    /// Keys of all entries, in order
    pub fn config_keys(&self) -> Vec<&str> {
        self.configs.iter().map(|c| c.name()).collect()
    }
}
