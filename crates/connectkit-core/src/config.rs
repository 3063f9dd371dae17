//! Process settings for the wizard pipeline
//!
//! Settings are optional; every field has a default. They can be loaded from
//! a YAML file:
//!
//! ```yaml
//! topics_regex_placeholder: "__connectkit_all_topics__"
//! injected_values:
//!   - key: consumer.override.client.id
//!     value: connectkit
//!     authoritative: true
//! disabled_guides:
//!   - com.snowflake.kafka.connector.SnowflakeSinkConnector
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::ConfigMap;

/// Placeholder used for `topics.regex` when neither `topics` nor `topics.regex` is set
pub const DEFAULT_TOPICS_REGEX_PLACEHOLDER: &str = "__connectkit_all_topics__";

/// Reserved `topics.regex` value shared by the write and read paths
///
/// The write path injects it so the framework's "topics or topics.regex"
/// check passes; the read path rewrites it to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicsRegexPlaceholder(String);

impl TopicsRegexPlaceholder {
    /// Wrap a literal
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    /// The literal value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `value` is the placeholder
    pub fn matches(&self, value: &Value) -> bool {
        value.as_str() == Some(self.0.as_str())
    }
}

impl Default for TopicsRegexPlaceholder {
    fn default() -> Self {
        Self::new(DEFAULT_TOPICS_REGEX_PLACEHOLDER)
    }
}

/// A key/value pair a guide adds to every submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectedValue {
    /// Configuration key
    pub key: String,

    /// Value to inject
    pub value: Value,

    /// Overwrite a value supplied by the user
    #[serde(default)]
    pub authoritative: bool,
}

impl InjectedValue {
    /// Value that only fills a missing key
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            authoritative: false,
        }
    }

    /// Value that overwrites whatever the user supplied
    pub fn authoritative(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            authoritative: true,
            ..Self::new(key, value)
        }
    }

    /// Apply the injection to `config`
    pub fn apply(&self, config: &mut ConfigMap) {
        let missing = config.get(&self.key).is_none_or(is_blank);
        if self.authoritative || missing {
            config.insert(self.key.clone(), self.value.clone());
        }
    }
}

/// Whether a submitted value counts as not set
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Settings for building a [`crate::Pipeline`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardSettings {
    /// `topics.regex` placeholder literal
    #[serde(default)]
    pub topics_regex_placeholder: TopicsRegexPlaceholder,

    /// Values injected into every submission, by every guide
    #[serde(default)]
    pub injected_values: Vec<InjectedValue>,

    /// Plugin classes whose dedicated guide is not registered
    #[serde(default)]
    pub disabled_guides: Vec<String>,
}

impl WizardSettings {
    /// Load settings from a YAML file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let settings = WizardSettings::load("./connectkit.yaml")?;
    /// let pipeline = Pipeline::new(&settings)?;
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::SettingsNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        if settings.topics_regex_placeholder.as_str().is_empty() {
            tracing::warn!("empty topics.regex placeholder configured, using the default");
            return Ok(Self {
                topics_regex_placeholder: TopicsRegexPlaceholder::default(),
                ..settings
            });
        }
        Ok(settings)
    }
}
