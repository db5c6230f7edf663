// entsift-core/src/engine.rs
//! The analysis engine: orchestrates candidate extraction and validation
//! per category and assembles the `Report`.
//!
//! The engine is single-threaded and synchronous; one `analyze` call fully
//! completes before returning. The compiled registry is read-only after
//! construction, so a single engine may be shared across threads and each
//! call builds its own report.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ExtractionConfig;
use crate::registry::{get_or_compile_rules, CompiledRule, Registry};
use crate::report::{CategoryResult, Report, ResultEntry};
use crate::validators;

/// Recommended per-category matching-time budget.
pub const DEFAULT_CATEGORY_DEADLINE: Duration = Duration::from_millis(1500);

/// Result representation produced by the engine, chosen per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Keep each distinct accepted string once (deduplicated before
    /// validation, so each distinct candidate is validated exactly once).
    #[default]
    Unique,
    /// Map each accepted string to its occurrence count; every occurrence
    /// is validated independently.
    Count,
}

/// Tunable options for an `AnalysisEngine`.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Result representation for every category.
    pub aggregation: AggregationMode,
    /// Wall-clock budget for one category's pattern scan. Exceeding it is
    /// a recoverable, per-category failure, never a process-fatal one.
    pub category_deadline: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            aggregation: AggregationMode::default(),
            category_deadline: DEFAULT_CATEGORY_DEADLINE,
        }
    }
}

/// Runs the registered rules over input text and builds per-category
/// results.
///
/// Construction is the only fallible step; see `analyze` for the
/// runtime contract.
#[derive(Debug)]
pub struct AnalysisEngine {
    registry: Arc<Registry>,
    config: ExtractionConfig,
    options: EngineOptions,
}

impl AnalysisEngine {
    /// Builds an engine with default options from the given configuration.
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        Self::with_options(config, EngineOptions::default())
    }

    /// Builds an engine with explicit options. Fails fast on any
    /// configuration defect (invalid pattern, duplicate category,
    /// unknown validator).
    pub fn with_options(config: ExtractionConfig, options: EngineOptions) -> Result<Self> {
        let registry = get_or_compile_rules(&config)
            .context("Failed to compile extraction rules for AnalysisEngine")?;

        Ok(Self {
            registry,
            config,
            options,
        })
    }

    /// Analyzes the given text and returns the per-category report.
    ///
    /// This never fails once the engine is constructed: validator failures
    /// reject the affected candidate, and a category that exceeds its
    /// matching-time budget is recorded as timed out with an empty entry
    /// while the remaining categories proceed. Empty or whitespace-only
    /// input short-circuits to an empty report without invoking any rule.
    pub fn analyze(&self, content: &str) -> Report {
        let mut report = Report::default();

        if content.trim().is_empty() {
            debug!("Input is empty or whitespace-only; returning an empty report.");
            return report;
        }

        for rule in &self.registry.rules {
            if !rule.enabled {
                debug!("Category '{}' is disabled; skipping.", rule.category);
                continue;
            }

            let deadline = Instant::now() + self.options.category_deadline;
            let Some(candidates) = scan_candidates(rule, content, deadline) else {
                warn!(
                    "Category '{}' exceeded its matching-time budget ({:?}); recording a timeout.",
                    rule.category, self.options.category_deadline
                );
                report.push(CategoryResult::timed_out(
                    rule.category.as_str(),
                    self.empty_entry(),
                ));
                continue;
            };

            let entry = self.aggregate(rule, candidates);
            report.push(CategoryResult::completed(rule.category.as_str(), entry));
        }

        report
    }

    /// Validates candidates and folds them into the configured result shape.
    fn aggregate(&self, rule: &CompiledRule, candidates: Vec<String>) -> ResultEntry {
        match self.options.aggregation {
            AggregationMode::Unique => {
                let mut seen = HashSet::new();
                let mut accepted = Vec::new();
                for candidate in candidates {
                    if !seen.insert(candidate.clone()) {
                        continue;
                    }
                    if self.run_validator(rule, &candidate) {
                        accepted.push(candidate);
                    }
                }
                ResultEntry::Unique(accepted)
            }
            AggregationMode::Count => {
                let mut counts: Vec<(String, usize)> = Vec::new();
                for candidate in candidates {
                    if !self.run_validator(rule, &candidate) {
                        continue;
                    }
                    match counts.iter_mut().find(|(value, _)| *value == candidate) {
                        Some((_, count)) => *count += 1,
                        None => counts.push((candidate, 1)),
                    }
                }
                ResultEntry::Counts(counts)
            }
        }
    }

    /// Applies the rule's validator to a candidate, collapsing an internal
    /// validator failure to a rejection. Rules without a validator accept
    /// every candidate.
    fn run_validator(&self, rule: &CompiledRule, candidate: &str) -> bool {
        let Some(kind) = rule.validator else {
            return true;
        };
        match validators::run(kind, candidate) {
            Ok(accepted) => accepted,
            Err(e) => {
                debug!(
                    "Validator '{}' failed on candidate '{}' for category '{}': {}; rejecting.",
                    kind.name(),
                    candidate,
                    rule.category,
                    e
                );
                false
            }
        }
    }

    /// An empty entry matching the configured aggregation shape.
    fn empty_entry(&self) -> ResultEntry {
        match self.options.aggregation {
            AggregationMode::Unique => ResultEntry::Unique(Vec::new()),
            AggregationMode::Count => ResultEntry::Counts(Vec::new()),
        }
    }

    /// The compiled registry backing this engine.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// The engine's options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

/// Scans the text with the rule's pattern, collecting every non-overlapping
/// match left to right. Returns `None` if the deadline expires mid-scan.
///
/// Matches immediately followed by a letter or digit are discarded when the
/// rule requires a terminal break; this stands in for the negative
/// lookahead the `regex` crate does not provide.
fn scan_candidates(rule: &CompiledRule, content: &str, deadline: Instant) -> Option<Vec<String>> {
    let mut candidates = Vec::new();
    for m in rule.regex.find_iter(content) {
        if Instant::now() >= deadline {
            return None;
        }
        if rule.require_terminal_break && followed_by_alphanumeric(content, m.end()) {
            debug!(
                "Category '{}': discarding '{}' at {}..{} (followed by alphanumeric).",
                rule.category,
                m.as_str(),
                m.start(),
                m.end()
            );
            continue;
        }
        candidates.push(m.as_str().to_string());
    }
    Some(candidates)
}

/// Whether the character immediately after byte offset `end` is a letter
/// or digit (Unicode-aware).
fn followed_by_alphanumeric(content: &str, end: usize) -> bool {
    content[end..]
        .chars()
        .next()
        .map_or(false, |c| c.is_alphanumeric())
}

/// Analyzes a string in a single call, compiling the configuration and
/// discarding the engine afterwards. Convenience entry point for one-shot,
/// non-interactive use; the compiled registry is still served from the
/// shared cache on repeated calls with the same configuration.
pub fn analyze_string(
    config: ExtractionConfig,
    options: EngineOptions,
    content: &str,
) -> Result<Report> {
    let engine = AnalysisEngine::with_options(config, options)?;
    Ok(engine.analyze(content))
}
