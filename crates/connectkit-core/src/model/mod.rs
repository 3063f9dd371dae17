//! Configuration definition model
//!
//! A [`ConfigurationEntry`] is the unit patch rules and hooks operate on: the
//! framework-authored schema of one configuration key, its runtime value
//! state, and optional presentation hints for the UI.
//!
//! Entries are values. Every `with_*` method consumes the entry and returns
//! the updated copy, so a chain of patches always yields a new value and never
//! touches shared state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod validation;
pub mod wizard;

pub use validation::{RawConfigEntry, ValidationResult};
pub use wizard::{WizardGroup, WizardResponse, WizardStep};

/// Flat key → value configuration map as submitted by a user
pub type ConfigMap = serde_json::Map<String, Value>;

/// Type tag of a configuration key, as declared by the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfigType {
    /// true / false
    Boolean,
    /// Free text
    #[default]
    String,
    /// 32-bit integer
    Int,
    /// 16-bit integer
    Short,
    /// 64-bit integer
    Long,
    /// Floating point number
    Double,
    /// Comma-separated list
    List,
    /// Fully qualified class name
    Class,
    /// Secret text
    Password,
}

/// Importance tier of a configuration key
///
/// HIGH and MEDIUM keys are always shown, LOW keys only in the advanced
/// section of a wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Importance {
    /// Always shown, prominently
    High,
    /// Always shown
    #[default]
    Medium,
    /// Advanced only
    Low,
}

/// Width hint for rendering an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Width {
    /// No hint
    #[default]
    None,
    /// Narrow input
    Short,
    /// Regular input
    Medium,
    /// Wide input
    Long,
}

/// UI component hint attached by patch rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    /// Render recommended values as a radio group
    RadioGroup,
    /// Render recommended values as a drop-down
    Select,
    /// Masked input
    Password,
    /// Multi-line text input
    TextArea,
    /// JSON editor
    Json,
}

/// Schema metadata of a single configuration key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationKeySchema {
    /// Configuration key
    pub name: String,

    /// Declared type
    #[serde(rename = "type", default)]
    pub config_type: ConfigType,

    /// Default value declared by the plugin (or injected by a patch rule)
    #[serde(default)]
    pub default_value: Option<String>,

    /// Set only when the default was injected rather than declared by the plugin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_default: Option<String>,

    /// Importance tier
    #[serde(default)]
    pub importance: Importance,

    /// Free-text documentation
    #[serde(default)]
    pub documentation: Option<String>,

    /// Group name authored by the plugin
    #[serde(default)]
    pub group: Option<String>,

    /// Display order within the group
    #[serde(default)]
    pub order: i32,

    /// Width hint
    #[serde(default)]
    pub width: Width,

    /// Whether the key must be set
    #[serde(default)]
    pub required: bool,

    /// Human display name
    #[serde(default)]
    pub display_name: Option<String>,

    /// Keys whose definition depends on this one
    #[serde(default)]
    pub dependents: Vec<String>,
}

/// Runtime value state of a single configuration key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationValueState {
    /// Configuration key
    pub name: String,

    /// Current value, `null` when unset
    #[serde(default)]
    pub value: Value,

    /// Recommended values as plain strings
    #[serde(default)]
    pub recommended_values: Vec<String>,

    /// Validation errors
    #[serde(default)]
    pub errors: Vec<String>,

    /// Whether the key should be rendered
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// A recommended value with a human label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedValue {
    /// Machine value sent to the framework
    pub value: String,
    /// Label shown to the user
    pub display_name: String,
}

/// Presentation hints richer than the framework's own schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationMetadata {
    /// Component to render the key with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentType>,

    /// Labelled recommended values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_values: Vec<RecommendedValue>,
}

/// Schema, value state and presentation hints of one configuration key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationEntry {
    /// Schema metadata
    pub definition: ConfigurationKeySchema,

    /// Runtime value state
    pub value: ConfigurationValueState,

    /// Presentation hints
    #[serde(default)]
    pub metadata: PresentationMetadata,

    /// Current value was filled in from an injected default
    #[serde(skip)]
    default_filled: bool,
}

impl ConfigurationEntry {
    /// Create a synthetic entry for a key the framework does not expose
    pub fn new(name: impl Into<String>, config_type: ConfigType) -> Self {
        let name = name.into();
        Self {
            definition: ConfigurationKeySchema {
                name: name.clone(),
                config_type,
                default_value: None,
                override_default: None,
                importance: Importance::Medium,
                documentation: None,
                group: None,
                order: 0,
                width: Width::None,
                required: false,
                display_name: None,
                dependents: Vec::new(),
            },
            value: ConfigurationValueState {
                name,
                value: Value::Null,
                recommended_values: Vec::new(),
                errors: Vec::new(),
                visible: true,
            },
            metadata: PresentationMetadata::default(),
            default_filled: false,
        }
    }

    /// Build an entry from one framework validation record
    pub fn from_raw(raw: RawConfigEntry) -> Self {
        let RawConfigEntry { definition, mut value } = raw;
        if value.name != definition.name {
            value.name = definition.name.clone();
        }
        Self {
            definition,
            value,
            metadata: PresentationMetadata::default(),
            default_filled: false,
        }
    }

    /// Configuration key
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Current value rendered as a string; `None` when unset
    pub fn current_str(&self) -> Option<String> {
        scalar_to_string(&self.value.value)
    }

    /// Current value, falling back to the default when unset
    pub fn effective_str(&self) -> Option<String> {
        self.current_str()
            .or_else(|| self.definition.default_value.clone())
    }

    /// Whether no value has been set
    pub fn is_unset(&self) -> bool {
        self.current_str().is_none()
    }

    /// Required or HIGH importance
    pub fn is_important(&self) -> bool {
        self.definition.required || self.definition.importance == Importance::High
    }

    /// Replace the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.definition.display_name = Some(display_name.into());
        self
    }

    /// Replace the documentation
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.definition.documentation = Some(documentation.into());
        self
    }

    /// Replace the importance tier
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.definition.importance = importance;
        self
    }

    /// Replace the declared type
    pub fn with_type(mut self, config_type: ConfigType) -> Self {
        self.definition.config_type = config_type;
        self
    }

    /// Inject a default value
    ///
    /// Records the default as an override and fills the current value if it
    /// is unset or was itself filled by an earlier injected default. A value
    /// that came from the framework or the user is kept.
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        if self.is_unset() || self.default_filled {
            self.value.value = Value::String(default_value.clone());
            self.default_filled = true;
        }
        self.definition.override_default = Some(default_value.clone());
        self.definition.default_value = Some(default_value);
        self
    }

    /// Replace the current value
    pub fn with_value(mut self, value: Value) -> Self {
        self.value.value = value;
        self.default_filled = false;
        self
    }

    /// Replace the plain recommended values
    pub fn with_recommended_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value.recommended_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the recommended values with labelled options
    ///
    /// The plain recommended value list is kept in sync with the option values.
    pub fn with_recommended_options(mut self, options: &[(&str, &str)]) -> Self {
        self.value.recommended_values = options.iter().map(|(v, _)| v.to_string()).collect();
        self.metadata.recommended_values = options
            .iter()
            .map(|(value, label)| RecommendedValue {
                value: value.to_string(),
                display_name: label.to_string(),
            })
            .collect();
        self
    }

    /// Replace the required flag
    pub fn with_required(mut self, required: bool) -> Self {
        self.definition.required = required;
        self
    }

    /// Replace the visibility flag
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.value.visible = visible;
        self
    }

    /// Replace the UI component hint
    pub fn with_component(mut self, component: ComponentType) -> Self {
        self.metadata.component = Some(component);
        self
    }

    /// Replace the group
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.definition.group = Some(group.into());
        self
    }

    /// Replace the display order within the group
    pub fn with_order(mut self, order: i32) -> Self {
        self.definition.order = order;
        self
    }

    /// Replace the width hint
    pub fn with_width(mut self, width: Width) -> Self {
        self.definition.width = width;
        self
    }

    /// Append a validation error
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.value.errors.push(error.into());
        self
    }
}

/// Render a scalar JSON value as a string
///
/// Returns `None` for `null`, empty strings, arrays and objects.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_framework_entry() {
        let raw = json!({
            "definition": {
                "name": "tasks.max",
                "type": "INT",
                "required": false,
                "default_value": "1",
                "importance": "HIGH",
                "documentation": "Maximum number of tasks",
                "group": "Common",
                "width": "SHORT",
                "display_name": "Tasks max",
                "dependents": [],
                "order": 3
            },
            "value": {
                "name": "tasks.max",
                "value": "1",
                "recommended_values": [],
                "errors": [],
                "visible": true
            }
        });
        let raw: RawConfigEntry = serde_json::from_value(raw).unwrap();
        let entry = ConfigurationEntry::from_raw(raw);
        assert_eq!(entry.name(), "tasks.max");
        assert_eq!(entry.definition.config_type, ConfigType::Int);
        assert_eq!(entry.definition.importance, Importance::High);
        assert_eq!(entry.definition.width, Width::Short);
        assert_eq!(entry.definition.order, 3);
        assert_eq!(entry.current_str(), Some("1".to_string()));
        assert!(entry.definition.override_default.is_none());
    }

    #[test]
    fn test_from_raw_syncs_value_name() {
        let mut raw = RawConfigEntry {
            definition: ConfigurationEntry::new("topics", ConfigType::List).definition,
            value: ConfigurationEntry::new("topics", ConfigType::List).value,
        };
        raw.value.name = "something.else".to_string();
        let entry = ConfigurationEntry::from_raw(raw);
        assert_eq!(entry.value.name, "topics");
    }

    #[test]
    fn test_parse_null_fields() {
        let raw = json!({
            "definition": {"name": "x", "type": "STRING", "default_value": null,
                           "documentation": null, "group": null, "display_name": null},
            "value": {"name": "x", "value": null}
        });
        let raw: RawConfigEntry = serde_json::from_value(raw).unwrap();
        let entry = ConfigurationEntry::from_raw(raw);
        assert!(entry.is_unset());
        assert!(entry.value.visible);
        assert!(entry.definition.display_name.is_none());
    }

    #[test]
    fn test_default_value_fills_unset_value() {
        let entry = ConfigurationEntry::new("format.output.type", ConfigType::String)
            .with_default_value("json");
        assert_eq!(entry.definition.default_value.as_deref(), Some("json"));
        assert_eq!(entry.definition.override_default.as_deref(), Some("json"));
        assert_eq!(entry.value.value, json!("json"));
    }

    #[test]
    fn test_default_value_keeps_user_value() {
        let entry = ConfigurationEntry::new("format.output.type", ConfigType::String)
            .with_value(json!("avro"))
            .with_default_value("json");
        assert_eq!(entry.value.value, json!("avro"));
        assert_eq!(entry.effective_str(), Some("avro".to_string()));
    }

    #[test]
    fn test_default_value_replaces_previous_default() {
        let entry = ConfigurationEntry::new("value.converter", ConfigType::Class)
            .with_default_value("bytes")
            .with_default_value("string");
        assert_eq!(entry.value.value, json!("string"));
        assert_eq!(entry.definition.default_value.as_deref(), Some("string"));
    }

    #[test]
    fn test_default_value_keeps_framework_value_equal_to_earlier_default() {
        let raw = json!({
            "definition": {"name": "value.converter", "type": "CLASS"},
            "value": {"name": "value.converter", "value": "bytes"}
        });
        let raw: RawConfigEntry = serde_json::from_value(raw).unwrap();
        let entry = ConfigurationEntry::from_raw(raw)
            .with_default_value("bytes")
            .with_default_value("string");
        assert_eq!(entry.value.value, json!("bytes"));
        assert_eq!(entry.definition.default_value.as_deref(), Some("string"));
    }

    #[test]
    fn test_explicit_value_is_not_refilled() {
        let entry = ConfigurationEntry::new("value.converter", ConfigType::Class)
            .with_default_value("bytes")
            .with_value(json!("bytes"))
            .with_default_value("string");
        assert_eq!(entry.value.value, json!("bytes"));
    }

    #[test]
    fn test_recommended_options_sync_plain_values() {
        let entry = ConfigurationEntry::new("mode", ConfigType::String)
            .with_recommended_options(&[("bulk", "Bulk"), ("incrementing", "Incrementing")]);
        assert_eq!(entry.value.recommended_values, vec!["bulk", "incrementing"]);
        assert_eq!(entry.metadata.recommended_values[1].display_name, "Incrementing");
    }

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!("a")), Some("a".to_string()));
        assert_eq!(scalar_to_string(&json!(3)), Some("3".to_string()));
        assert_eq!(scalar_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(&json!("")), None);
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!(["a"])), None);
    }

    #[test]
    fn test_serialize_skips_empty_metadata() {
        let entry = ConfigurationEntry::new("x", ConfigType::String);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["definition"]["type"], "STRING");
        assert_eq!(json["metadata"], json!({}));
        assert!(json["definition"].get("override_default").is_none());
    }
}
