//! connectkit Core Library
//!
//! This crate turns the generic configuration schema a connector framework
//! returns from its validate endpoint into an opinionated wizard description,
//! and pre-processes user-submitted configuration on its way back:
//! - Configuration definition model and wizard structures
//! - Selector-gated patch rules
//! - Per-plugin guides and hooks
//! - Pipeline orchestration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Validation  │────▶│ Patch Rules │────▶│   Guide +   │────▶ WizardResponse
//! │   Result    │     │  (ordered)  │     │    Hooks    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!
//! ConfigMap ─────────▶ Guide::to_framework ─────────────────▶ ConfigMap
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use connectkit_core::{Pipeline, WizardSettings};
//!
//! let pipeline = Pipeline::new(&WizardSettings::default())?;
//! let submitted = pipeline.to_framework(plugin_class, config.clone())?;
//! let wizard = pipeline.to_wizard(plugin_class, validation_result, &config);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod guide;
pub mod hooks;
pub mod model;
pub mod patch;
pub mod pipeline;
pub mod plugins;
pub mod selector;

pub use config::{InjectedValue, TopicsRegexPlaceholder, WizardSettings};
pub use error::{Error, Result};
pub use guide::{DefaultGuide, Guide, WizardGuide};
pub use model::{
    ConfigMap, ConfigurationEntry, ConfigurationKeySchema, ConfigurationValueState,
    ValidationResult, WizardGroup, WizardResponse, WizardStep,
};
pub use patch::{PatchContext, PatchRule};
pub use pipeline::Pipeline;
pub use selector::Selector;
