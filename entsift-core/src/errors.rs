//! errors.rs - Custom error types for the entsift-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! All of these are configuration-time failures: once an `AnalysisEngine`
//! has been constructed, `analyze` itself never returns an error.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `entsift-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EntsiftError {
    #[error("Failed to compile pattern for category '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Category '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Duplicate category name found: '{0}'")]
    DuplicateCategory(String),

    #[error("Category '{0}' references unknown validator '{1}'")]
    UnknownValidator(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
