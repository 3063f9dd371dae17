//! connectkit CLI
//!
//! Developer tool for rendering connector wizards and pre-processing
//! submissions outside the API service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// connectkit - guided connector configuration
#[derive(Parser)]
#[command(name = "connectkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file path
    #[arg(short, long, env = "CONNECTKIT_SETTINGS")]
    settings: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the wizard for a framework validation result
    Wizard {
        /// Connector plugin class
        #[arg(short, long)]
        plugin: String,

        /// Validation result JSON file
        #[arg(long)]
        validation: String,

        /// Submitted configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Pre-process a submitted configuration for the framework
    Submit {
        /// Connector plugin class
        #[arg(short, long)]
        plugin: String,

        /// Submitted configuration JSON file
        #[arg(short, long)]
        config: String,
    },

    /// List plugin classes with a dedicated guide
    Plugins,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for JSON output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = cli.settings.as_deref();
    match cli.command {
        Commands::Wizard {
            plugin,
            validation,
            config,
        } => {
            commands::wizard::run(settings, &plugin, &validation, config.as_deref())?;
        }
        Commands::Submit { plugin, config } => {
            commands::submit::run(settings, &plugin, &config)?;
        }
        Commands::Plugins => {
            commands::plugins::run(settings)?;
        }
    }

    Ok(())
}
