//! Submit command

use anyhow::{Context, Result};
use connectkit_core::ConfigMap;

use super::{load_pipeline, read_json};

/// Run the submit command
pub fn run(settings_path: Option<&str>, plugin_class: &str, config_path: &str) -> Result<()> {
    let pipeline = load_pipeline(settings_path)?;
    let config: ConfigMap = read_json(config_path)?;

    tracing::info!("Pre-processing {} keys for {}", config.len(), plugin_class);
    let config = pipeline
        .to_framework(plugin_class, config)
        .with_context(|| format!("Invalid configuration for {}", plugin_class))?;

    let output = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", output);
    Ok(())
}
