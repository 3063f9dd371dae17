//! Plugins command

use anyhow::Result;
use connectkit_core::plugins;

use super::load_pipeline;

/// Run the plugins command
pub fn run(settings_path: Option<&str>) -> Result<()> {
    let pipeline = load_pipeline(settings_path)?;
    let classes = pipeline.plugin_classes();
    tracing::info!("{} plugin classes with a dedicated guide", classes.len());

    for class in classes {
        println!("{}\t{}", plugins::family(class).unwrap_or("-"), class);
    }
    Ok(())
}
