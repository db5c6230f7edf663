// entsift/src/commands/mod.rs
//! Command implementations for the `entsift` CLI.
//! License: MIT OR APACHE 2.0

pub mod analyze;
pub mod rules;

use anyhow::{Context, Result};
use entsift_core::ExtractionConfig;
use std::path::Path;

/// Loads the extraction configuration: a custom YAML file when given,
/// otherwise the embedded defaults.
pub fn load_config(path: Option<&Path>) -> Result<ExtractionConfig> {
    match path {
        Some(path) => ExtractionConfig::load_from_file(path)
            .with_context(|| format!("Failed to load rules from {}", path.display())),
        None => ExtractionConfig::load_default_rules(),
    }
}
