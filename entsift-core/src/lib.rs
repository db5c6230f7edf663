// entsift-core/src/lib.rs
//! # EntSift Core Library
//!
//! `entsift-core` provides the fundamental, platform-independent logic for
//! extracting structured entities (abbreviations, IPv4 addresses, calendar
//! dates) from free-form text. Pattern matching discovers candidate
//! substrings; a second, semantically precise validation stage rejects the
//! false positives a regular expression alone cannot exclude — Roman
//! numerals posing as abbreviations, out-of-range IP octets, and
//! calendar-invalid dates.
//!
//! The library is designed to be pure and stateless, focusing solely on
//! the candidate-then-validate pipeline, without concerns for I/O or
//! application-specific state management. Console rendering, file loading,
//! and report formatting live in consumers such as the `entsift` CLI.
//!
//! ## Modules
//!
//! * `config`: Defines `ExtractionRule`s and `ExtractionConfig` for specifying categories.
//! * `registry`: Compiles rules into an immutable, cached `Registry`.
//! * `validators`: Semantic validation for candidates (IPv4 ranges, calendar dates, abbreviations).
//! * `report`: Per-category result structures built by the engine.
//! * `engine`: The `AnalysisEngine` that orchestrates extraction and validation.
//! * `errors`: The structured `EntsiftError` taxonomy for configuration-time failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use entsift_core::{analyze_string, EngineOptions, ExtractionConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the built-in extraction rules.
//!     let config = ExtractionConfig::load_default_rules()?;
//!
//!     // 2. Analyze some text in a single call.
//!     let input = "Shipped on 31.12.2023 from 10.0.0.1, written in C# on .NET";
//!     let report = analyze_string(config, EngineOptions::default(), input)?;
//!
//!     // 3. Results are keyed by category, in registration order.
//!     let dates = report.get("date").expect("date category is registered");
//!     assert!(dates.entry.contains("31.12.2023"));
//!
//!     let ips = report.get("ip-address").expect("ip category is registered");
//!     assert!(ips.entry.contains("10.0.0.1"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only configuration errors escape to the caller, and only at engine
//! construction time: an invalid pattern, a duplicate category, or an
//! unknown validator name fails fast as an [`EntsiftError`]. Once an
//! engine exists, `analyze` never fails — validator-internal failures
//! reject the affected candidate, and a category that exceeds its
//! matching-time budget is reported as timed out while the remaining
//! categories proceed.
//!
//! ## Design Principles
//!
//! * **Candidate-then-validate:** coarse patterns over-match on purpose;
//!   validators are mandatory semantics, not cosmetics.
//! * **Stateless:** every `analyze` call builds a fresh report; the
//!   registry is read-only after construction, so concurrent calls
//!   against one engine need no locking.
//! * **Bounded:** each category's scan runs under a wall-clock deadline;
//!   a timeout is a per-category outcome, never a process failure.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod registry;
pub mod report;
pub mod validators;

/// Re-exports the public configuration types and functions for managing
/// extraction rules.
pub use config::{validate_rules, ExtractionConfig, ExtractionRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::EntsiftError;

/// Re-exports the analysis engine and its options.
pub use engine::{
    analyze_string, AggregationMode, AnalysisEngine, EngineOptions, DEFAULT_CATEGORY_DEADLINE,
};

/// Re-exports the report structures produced by `analyze`.
pub use report::{CategoryOutcome, CategoryResult, Report, ResultEntry};

/// Re-exports key types from the registry module for advanced usage.
pub use registry::{compile_rules, get_or_compile_rules, CompiledRule, Registry};

/// Re-exports the validator dispatch type.
pub use validators::ValidatorKind;
