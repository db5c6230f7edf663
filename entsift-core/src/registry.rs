//! registry.rs - Manages the compilation and caching of extraction rules.
//!
//! This module converts an `ExtractionConfig` into a `Registry` of
//! compiled rules, optimized for repeated analysis passes. Compilation is
//! fail-fast: invalid regex syntax, duplicate categories, and unknown
//! validator names are all rejected here, at construction time, never at
//! match time. A global, shared cache avoids redundant compilation.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{ExtractionConfig, ExtractionRule, MAX_PATTERN_LENGTH};
use crate::errors::EntsiftError;
use crate::validators::ValidatorKind;

/// Represents a single compiled extraction rule.
///
/// This struct binds a category name to its compiled candidate pattern and
/// resolved validator, ready for efficient application to input text.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression producing candidate substrings.
    pub regex: Regex,
    /// The unique category name of the rule.
    pub category: String,
    /// The resolved validator, or `None` if every candidate is accepted.
    pub validator: Option<ValidatorKind>,
    /// Whether matches immediately followed by an alphanumeric character
    /// are discarded (lookahead simulation).
    pub require_terminal_break: bool,
    /// Whether the rule participates in analysis.
    pub enabled: bool,
}

/// The ordered, immutable set of compiled rules for one configuration.
///
/// Rule order equals registration order and determines the order of
/// categories in every report.
#[derive(Debug)]
pub struct Registry {
    /// Compiled rules in registration order.
    pub rules: Vec<CompiledRule>,
}

impl Registry {
    /// Yields the registered category names in registration order.
    /// The order is stable across calls.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.category.as_str())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled registries.
    /// The key is a hash of the `ExtractionConfig`.
    static ref COMPILED_REGISTRY_CACHE: RwLock<HashMap<u64, Arc<Registry>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `ExtractionConfig` to create a stable, unique key for the
/// cache. Rules are hashed in registration order: order is part of the
/// registry's identity, so two configs with the same rules in a different
/// order compile to distinct registries.
fn hash_config(config: &ExtractionConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.rules.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `ExtractionRule`s into a `Registry` for efficient
/// matching. This is the low-level function that performs the actual regex
/// compilation and validator resolution.
pub fn compile_rules(rules_to_compile: Vec<ExtractionRule>) -> Result<Registry, EntsiftError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut seen_categories = HashSet::new();
    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        debug!(
            "Attempting to compile rule '{}' with pattern '{}'",
            &rule.category, &rule.pattern
        );

        if !seen_categories.insert(rule.category.clone()) {
            compilation_errors.push(EntsiftError::DuplicateCategory(rule.category));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(EntsiftError::PatternLengthExceeded(
                rule.category,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let validator = match rule.validator.as_deref() {
            Some(name) => match ValidatorKind::from_name(name) {
                Some(kind) => Some(kind),
                None => {
                    compilation_errors.push(EntsiftError::UnknownValidator(
                        rule.category,
                        name.to_string(),
                    ));
                    continue;
                }
            },
            None => None,
        };

        let regex_result = RegexBuilder::new(&rule.pattern)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                log::debug!(
                    target: "entsift_core::registry",
                    "Rule '{}' compiled successfully.",
                    &rule.category
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    category: rule.category,
                    validator,
                    require_terminal_break: rule.require_terminal_break,
                    enabled: rule.enabled.unwrap_or(true),
                });
            }
            Err(e) => {
                compilation_errors.push(EntsiftError::RuleCompilationError(rule.category, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        // Collect errors into a single string for a concise error report
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(EntsiftError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling rules. Total compiled: {}.",
            compiled_rules.len()
        );
        Ok(Registry {
            rules: compiled_rules,
        })
    }
}

/// Gets a `Registry` instance from the cache or compiles one if not found.
///
/// This is the public entry point for retrieving compiled rules. It returns
/// an `Arc` to a `Registry`, allowing for cheap sharing across engines and
/// threads; the registry is read-only after construction.
pub fn get_or_compile_rules(config: &ExtractionConfig) -> Result<Arc<Registry>> {
    let cache_key = hash_config(config);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_REGISTRY_CACHE.read().unwrap();
        if let Some(registry) = cache.get(&cache_key) {
            debug!("Serving compiled registry from cache for key: {}", &cache_key);
            return Ok(Arc::clone(registry));
        }
    } // Read lock is released here.

    // Not in cache, so we compile.
    debug!("Compiled registry not found in cache. Compiling now.");
    let compiled = compile_rules(config.rules.clone())?;
    let compiled_arc = Arc::new(compiled);

    // Acquire a write lock to insert the new registry.
    COMPILED_REGISTRY_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached registry for key: {}", &cache_key);
    Ok(compiled_arc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;

    fn rule(category: &str, pattern: &str) -> ExtractionRule {
        ExtractionRule {
            category: category.to_string(),
            pattern: pattern.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn compilation_preserves_registration_order() {
        let registry = compile_rules(vec![
            rule("zeta", r"\d+"),
            rule("alpha", r"[a-z]+"),
            rule("mid", r"\w+"),
        ])
        .unwrap();
        let categories: Vec<&str> = registry.categories().collect();
        assert_eq!(categories, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_category_fails_compilation() {
        let err = compile_rules(vec![rule("dup", r"\d+"), rule("dup", r"\w+")]).unwrap_err();
        assert!(err.to_string().contains("Duplicate category name"));
    }

    #[test]
    fn invalid_pattern_fails_compilation() {
        let err = compile_rules(vec![rule("broken", r"([a-z")]).unwrap_err();
        assert!(err.to_string().contains("Failed to compile pattern"));
    }

    #[test]
    fn unknown_validator_fails_compilation() {
        let mut bad = rule("ssn", r"\d+");
        bad.validator = Some("luhn".to_string());
        let err = compile_rules(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("unknown validator"));
    }

    #[test]
    fn cache_returns_shared_registry_for_identical_configs() {
        let config = ExtractionConfig {
            rules: vec![rule("cache-probe", r"probe\d+")],
        };
        let first = get_or_compile_rules(&config).unwrap();
        let second = get_or_compile_rules(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cache_distinguishes_rule_order() {
        let forward = ExtractionConfig {
            rules: vec![rule("order-a", r"a+"), rule("order-b", r"b+")],
        };
        let reversed = ExtractionConfig {
            rules: vec![rule("order-b", r"b+"), rule("order-a", r"a+")],
        };
        let first = get_or_compile_rules(&forward).unwrap();
        let second = get_or_compile_rules(&reversed).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_ne!(
            first.categories().collect::<Vec<_>>(),
            second.categories().collect::<Vec<_>>()
        );
    }
}
