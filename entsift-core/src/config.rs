//! Configuration management for `entsift-core`.
//!
//! This module defines the core data structures for extraction rules.
//! It handles serialization/deserialization of YAML configurations and
//! provides utilities for loading and validating these configs. The core
//! never reads files on its own initiative; callers hand it a path or use
//! the embedded default rule set.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::validators::ValidatorKind;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single extraction rule: one category, one candidate
/// pattern, and the name of the validator that vets each candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionRule {
    /// Unique category name (e.g. "ip-address"). Identity of the rule.
    pub category: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string producing candidate substrings.
    pub pattern: String,
    /// Name of the validator applied to each candidate. `None` accepts
    /// every candidate the pattern produces.
    pub validator: Option<String>,
    /// If true, a raw match immediately followed by a letter or digit is
    /// discarded. This simulates the negative lookahead "not followed by
    /// an alphanumeric character", which the `regex` crate does not
    /// support natively.
    pub require_terminal_break: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for ExtractionRule {
    fn default() -> Self {
        Self {
            category: String::new(),
            description: None,
            pattern: String::new(),
            validator: None,
            require_terminal_break: false,
            enabled: None,
        }
    }
}

/// Represents the top-level configuration structure for EntSift: the
/// ordered list of extraction rules. Order is significant; categories
/// appear in the report in registration order.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct ExtractionConfig {
    pub rules: Vec<ExtractionRule>,
}

impl ExtractionConfig {
    /// Loads extraction rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ExtractionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the default extraction rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: ExtractionConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }
}

/// Validates rule integrity (names, regex compilation, validator names).
///
/// All problems are collected and reported in a single error so that a
/// misconfigured file surfaces every defect at once.
pub fn validate_rules(rules: &[ExtractionRule]) -> Result<()> {
    let mut category_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.category.is_empty() {
            errors.push("A rule has an empty `category` field.".to_string());
        } else if !category_names.insert(rule.category.clone()) {
            errors.push(format!("Duplicate category name found: '{}'.", rule.category));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.category));
        } else if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.category,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
        } else if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!(
                "Rule '{}' has an invalid regex pattern: {}",
                rule.category, e
            ));
        }

        if let Some(name) = &rule.validator {
            if ValidatorKind::from_name(name).is_none() {
                errors.push(format!(
                    "Rule '{}' references unknown validator '{}'.",
                    rule.category, name
                ));
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
