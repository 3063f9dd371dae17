//! Framework validation result
//!
//! Mirrors the body of the connector framework's validate endpoint
//! (`PUT /connector-plugins/{class}/config/validate`).

use serde::{Deserialize, Serialize};

use super::{ConfigMap, ConfigurationKeySchema, ConfigurationValueState};

/// Validation result for one plugin class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Plugin class name
    pub name: String,

    /// Number of keys with at least one error
    #[serde(default)]
    pub error_count: u32,

    /// Group names in the plugin's declared order
    #[serde(default)]
    pub groups: Vec<String>,

    /// One record per configuration key
    #[serde(default)]
    pub configs: Vec<RawConfigEntry>,
}

/// Schema and value of one key, exactly as the framework returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConfigEntry {
    /// Schema metadata
    pub definition: ConfigurationKeySchema,
    /// Value state
    pub value: ConfigurationValueState,
}

impl ValidationResult {
    /// Current values of every key that has one
    pub fn current_values(&self) -> ConfigMap {
        self.configs
            .iter()
            .filter(|c| !c.value.value.is_null())
            .map(|c| (c.definition.name.clone(), c.value.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validation_result() {
        let body = r#"{
            "name": "org.apache.kafka.connect.mirror.MirrorHeartbeatConnector",
            "error_count": 1,
            "groups": ["Common", "Transforms"],
            "configs": [
                {
                    "definition": {"name": "name", "type": "STRING", "required": true,
                                   "importance": "HIGH", "group": "Common", "order": 1},
                    "value": {"name": "name", "value": null,
                              "errors": ["Missing required configuration \"name\" which has no default value."],
                              "visible": true}
                },
                {
                    "definition": {"name": "tasks.max", "type": "INT", "default_value": "1",
                                   "importance": "HIGH", "group": "Common", "order": 3},
                    "value": {"name": "tasks.max", "value": "1", "visible": true}
                }
            ]
        }"#;
        let result: ValidationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.error_count, 1);
        assert_eq!(result.configs.len(), 2);
        assert_eq!(result.configs[0].value.errors.len(), 1);

        let values = result.current_values();
        assert_eq!(values.len(), 1);
        assert_eq!(values["tasks.max"], "1");
    }
}
