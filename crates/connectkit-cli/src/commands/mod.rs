//! CLI command implementations

use anyhow::{Context, Result};
use connectkit_core::{Pipeline, WizardSettings};
use serde::de::DeserializeOwned;

pub mod plugins;
pub mod submit;
pub mod wizard;

/// Build the pipeline from an optional settings file
fn load_pipeline(settings_path: Option<&str>) -> Result<Pipeline> {
    let settings = match settings_path {
        Some(path) => {
            tracing::debug!("Loading settings: {}", path);
            WizardSettings::load(path).context("Failed to load settings")?
        }
        None => WizardSettings::default(),
    };
    Pipeline::new(&settings).context("Failed to build wizard pipeline")
}

/// Read and parse a JSON file
fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path))
}
