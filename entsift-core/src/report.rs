// File: entsift-core/src/report.rs
//! Data structures for the per-category analysis report.
//!
//! A `Report` is built fresh on every `analyze` call and carries one
//! `CategoryResult` per registered (enabled) rule, in registration order.
//! No state survives between calls.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;

/// How a category's extraction pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOutcome {
    /// The pattern scan ran to completion.
    Completed,
    /// The scan exceeded its matching-time budget and was abandoned;
    /// the entry is empty. Other categories are unaffected.
    TimedOut,
}

/// The accepted strings for one category, in one of two shapes.
///
/// Which shape the engine produces is a deployment choice made through
/// `EngineOptions::aggregation`; both are valid output forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultEntry {
    /// Uniqueness mode: each distinct accepted string exactly once,
    /// in first-occurrence order.
    Unique(Vec<String>),
    /// Counting mode: accepted string to occurrence count, in
    /// first-occurrence order.
    Counts(Vec<(String, usize)>),
}

impl ResultEntry {
    /// Whether the entry holds no accepted strings.
    pub fn is_empty(&self) -> bool {
        match self {
            ResultEntry::Unique(values) => values.is_empty(),
            ResultEntry::Counts(pairs) => pairs.is_empty(),
        }
    }

    /// Number of distinct accepted strings.
    pub fn len(&self) -> usize {
        match self {
            ResultEntry::Unique(values) => values.len(),
            ResultEntry::Counts(pairs) => pairs.len(),
        }
    }

    /// The distinct accepted strings in first-occurrence order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            ResultEntry::Unique(values) => values.iter().map(String::as_str).collect(),
            ResultEntry::Counts(pairs) => pairs.iter().map(|(value, _)| value.as_str()).collect(),
        }
    }

    /// Whether the given string was accepted for this category.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            ResultEntry::Unique(values) => values.iter().any(|v| v == value),
            ResultEntry::Counts(pairs) => pairs.iter().any(|(v, _)| v == value),
        }
    }

    /// Occurrence count for the given string, if it was accepted.
    /// In uniqueness mode an accepted string reports a count of 1.
    pub fn count_of(&self, value: &str) -> Option<usize> {
        match self {
            ResultEntry::Unique(values) => values.iter().any(|v| v == value).then_some(1),
            ResultEntry::Counts(pairs) => pairs
                .iter()
                .find(|(v, _)| v == value)
                .map(|(_, count)| *count),
        }
    }
}

/// The outcome and accepted strings for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    /// The category name, as registered.
    pub category: String,
    /// Whether the scan completed or hit its time budget.
    pub outcome: CategoryOutcome,
    /// The accepted strings. Empty when `outcome` is `TimedOut`.
    pub entry: ResultEntry,
}

impl CategoryResult {
    /// A completed result carrying the given entry.
    pub fn completed(category: impl Into<String>, entry: ResultEntry) -> Self {
        Self {
            category: category.into(),
            outcome: CategoryOutcome::Completed,
            entry,
        }
    }

    /// A timed-out sentinel with an empty entry of the given shape.
    pub fn timed_out(category: impl Into<String>, entry: ResultEntry) -> Self {
        debug_assert!(entry.is_empty());
        Self {
            category: category.into(),
            outcome: CategoryOutcome::TimedOut,
            entry,
        }
    }

    /// Whether this category's scan was abandoned on its deadline.
    pub fn is_timed_out(&self) -> bool {
        self.outcome == CategoryOutcome::TimedOut
    }
}

/// Ordered mapping from category name to its result entry.
///
/// Iteration order equals the registration order of the rules that
/// produced the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    entries: Vec<CategoryResult>,
}

impl Report {
    /// Whether no categories were entered (e.g. empty input).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of category results in the report.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates the category results in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryResult> {
        self.entries.iter()
    }

    /// Category names in registration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|result| result.category.as_str())
    }

    /// Looks up the result for a category by name.
    pub fn get(&self, category: &str) -> Option<&CategoryResult> {
        self.entries.iter().find(|result| result.category == category)
    }

    pub(crate) fn push(&mut self, result: CategoryResult) {
        self.entries.push(result);
    }
}
