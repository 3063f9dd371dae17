//! Wizard command

use anyhow::{Context, Result};
use connectkit_core::{ConfigMap, ValidationResult};

use super::{load_pipeline, read_json};

/// Run the wizard command
pub fn run(
    settings_path: Option<&str>,
    plugin_class: &str,
    validation_path: &str,
    config_path: Option<&str>,
) -> Result<()> {
    let pipeline = load_pipeline(settings_path)?;
    let validation: ValidationResult = read_json(validation_path)?;
    let config: ConfigMap = match config_path {
        Some(path) => read_json(path)?,
        None => validation.current_values(),
    };

    tracing::info!(
        "Rendering wizard for {} ({} keys)",
        plugin_class,
        validation.configs.len()
    );
    let response = pipeline.to_wizard(plugin_class, validation, &config);

    let output =
        serde_json::to_string_pretty(&response).context("Failed to serialize wizard response")?;
    println!("{}", output);
    Ok(())
}
