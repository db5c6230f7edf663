// File: entsift-core/src/validators.rs
//! Semantic validation functions for extracted entity candidates.
//!
//! This module provides the second stage of the candidate-then-validate
//! pipeline. The coarse regex patterns in the registry deliberately
//! over-match (e.g. the IPv4 pattern admits octets up to 999), and these
//! functions reject the false positives by applying structural and
//! range checks that a regular expression alone cannot express.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// The canonical Roman-numeral grammar, anchored at both ends so that any
/// extraneous character disqualifies the candidate. All groups are optional,
/// so the empty string satisfies the grammar (the Roman "zero").
static ROMAN_NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,4}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})$")
        .expect("Roman numeral grammar must compile")
});

/// Shape of a plain abbreviation: two or more uppercase letters in any
/// script, optionally followed by ASCII digits ("HTML5", "JSON", "UTF8").
static UPPERCASE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Lu}{2,}[0-9]*$").expect("abbreviation shape must compile")
});

/// Shape of a sigil abbreviation: one or two uppercase letters followed by
/// one or more `#` or `+` characters ("C#", "C++", "A+").
static SIGIL_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Lu}{1,2}[#+]+$").expect("sigil abbreviation shape must compile")
});

/// Accepted date formats, tried in order. `chrono`'s numeric specifiers
/// accept both zero-padded and unpadded day/month fields, so these three
/// cover `1.2.2023`, `01.02.2023`, `1/2/2023`, `01/02/2023` and ISO
/// `2023-02-01`.
const DATE_FORMATS: [&str; 3] = ["%d.%m.%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Identifies one of the built-in validator functions.
///
/// Configuration files reference validators by name; the name is resolved
/// to a `ValidatorKind` at rule-compilation time so that an unknown name
/// is a startup error rather than a silent no-op at match time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    Abbreviation,
    Ipv4,
    Date,
}

impl ValidatorKind {
    /// Resolves a validator name from a configuration file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "abbreviation" => Some(Self::Abbreviation),
            "ipv4" => Some(Self::Ipv4),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    /// The configuration-file name of this validator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Abbreviation => "abbreviation",
            Self::Ipv4 => "ipv4",
            Self::Date => "date",
        }
    }
}

/// Runs the given validator against a candidate string.
///
/// The `Result` layer exists so that a validator that fails internally is
/// distinguishable from one that rejects a candidate; the engine collapses
/// an `Err` to a rejection and logs it, never propagating it to callers.
pub fn run(kind: ValidatorKind, candidate: &str) -> Result<bool> {
    Ok(match kind {
        ValidatorKind::Abbreviation => is_valid_abbreviation(candidate),
        ValidatorKind::Ipv4 => is_valid_ipv4(candidate),
        ValidatorKind::Date => is_valid_date(candidate),
    })
}

/// Decides whether a candidate is an acceptable abbreviation.
///
/// Accepts the literal token `.NET` (case-insensitive), or a run of 2+
/// uppercase letters optionally followed by digits, or 1-2 uppercase
/// letters followed by `#`/`+` sigils. Candidates that fully satisfy the
/// Roman-numeral grammar ("XIV", "XXI") are rejected, since the uppercase
/// pattern cannot tell them apart from genuine abbreviations.
pub fn is_valid_abbreviation(candidate: &str) -> bool {
    if candidate.eq_ignore_ascii_case(".NET") {
        return true;
    }
    if is_roman_numeral(candidate) {
        return false;
    }
    UPPERCASE_RUN.is_match(candidate) || SIGIL_RUN.is_match(candidate)
}

/// Checks whether a candidate is a well-formed Roman numeral.
///
/// A candidate containing any digit, `#`, or `+` is never a Roman numeral;
/// otherwise it must fully match the canonical grammar. The empty string
/// matches the grammar and is reported as valid.
pub fn is_roman_numeral(candidate: &str) -> bool {
    if candidate
        .chars()
        .any(|c| c.is_ascii_digit() || c == '#' || c == '+')
    {
        return false;
    }
    ROMAN_NUMERAL.is_match(candidate)
}

/// Validates a dotted-quad IPv4 address candidate.
///
/// The registry pattern only guarantees four groups of 1-3 digits, which
/// admits values up to 999 per octet. This check parses each group and
/// requires it to fit in `[0, 255]`.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    let mut groups = 0usize;
    for part in candidate.split('.') {
        groups += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let Ok(value) = part.parse::<u16>() else {
            return false;
        };
        if value > 255 {
            return false;
        }
    }
    groups == 4
}

/// Validates a calendar date candidate against the accepted formats.
///
/// `NaiveDate::parse_from_str` performs an exact parse: it rejects
/// calendar-invalid dates (day 32, February 30th) and any trailing or
/// leading characters beyond the date token itself.
pub fn is_valid_date(candidate: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(candidate, format).is_ok())
}
