// entsift-core/tests/engine_integration_tests.rs
//! End-to-end tests for the analysis pipeline over the default rule set.

use anyhow::Result;
use entsift_core::{
    AggregationMode, AnalysisEngine, CategoryOutcome, EngineOptions, ExtractionConfig,
};

const MIXED_TEXT: &str = "In 1999 the XIV summit used C# and C++ with HTML5 and JSON over \
    .NET; servers 192.168.0.1 and 999.999.999.999 went live on 31.12.2023, \
    failed on 32.01.2023 and 30.02.2023, and retired 2023-12-31. XXI and XX \
    stay out; C# again, and C# once more.";

fn default_engine(mode: AggregationMode) -> Result<AnalysisEngine> {
    let config = ExtractionConfig::load_default_rules()?;
    let options = EngineOptions {
        aggregation: mode,
        ..Default::default()
    };
    Ok(AnalysisEngine::with_options(config, options)?)
}

#[test]
fn categories_appear_in_registration_order() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    let report = engine.analyze(MIXED_TEXT);
    let categories: Vec<&str> = report.categories().collect();
    assert_eq!(categories, vec!["abbreviation", "ip-address", "date"]);
    Ok(())
}

#[test]
fn abbreviations_accept_tech_tokens_and_reject_roman_numerals() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    let report = engine.analyze(MIXED_TEXT);
    let entry = &report.get("abbreviation").unwrap().entry;

    for accepted in [".NET", "C#", "C++", "HTML5", "JSON"] {
        assert!(entry.contains(accepted), "{accepted} should be accepted");
    }
    for rejected in ["XIV", "XXI", "XX"] {
        assert!(!entry.contains(rejected), "{rejected} should be rejected");
    }
    Ok(())
}

#[test]
fn ip_addresses_require_in_range_octets() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    let report = engine.analyze(MIXED_TEXT);
    let entry = &report.get("ip-address").unwrap().entry;

    assert!(entry.contains("192.168.0.1"));
    assert!(
        !entry.contains("999.999.999.999"),
        "coarse pattern matches, validator must reject"
    );
    for value in entry.values() {
        for octet in value.split('.') {
            let parsed: u16 = octet.parse().unwrap();
            assert!(parsed <= 255, "octet {octet} out of range in {value}");
        }
    }
    Ok(())
}

#[test]
fn dates_must_be_calendar_valid() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    let report = engine.analyze(MIXED_TEXT);
    let entry = &report.get("date").unwrap().entry;

    assert!(entry.contains("31.12.2023"));
    assert!(entry.contains("2023-12-31"));
    assert!(!entry.contains("32.01.2023"));
    assert!(!entry.contains("30.02.2023"));
    Ok(())
}

#[test]
fn uniqueness_mode_keeps_each_string_once() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    let report = engine.analyze("C# here, C# there, C# everywhere, HTML5 once");
    let entry = &report.get("abbreviation").unwrap().entry;
    assert_eq!(entry.values(), vec!["C#", "HTML5"]);
    Ok(())
}

#[test]
fn counting_mode_counts_accepted_occurrences() -> Result<()> {
    let engine = default_engine(AggregationMode::Count)?;
    let report = engine.analyze("C# here, C# there, C# everywhere, HTML5 once");
    let entry = &report.get("abbreviation").unwrap().entry;
    assert_eq!(entry.count_of("C#"), Some(3));
    assert_eq!(entry.count_of("HTML5"), Some(1));
    Ok(())
}

#[test_log::test]
fn analyze_is_idempotent() -> Result<()> {
    let engine = default_engine(AggregationMode::Count)?;
    let first = engine.analyze(MIXED_TEXT);
    let second = engine.analyze(MIXED_TEXT);
    assert_eq!(first, second);
    Ok(())
}

#[test_log::test]
fn empty_and_whitespace_input_yield_empty_reports() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    assert!(engine.analyze("").is_empty());
    assert!(engine.analyze(" \t\r\n ").is_empty());
    Ok(())
}

#[test]
fn completed_categories_report_completed_outcome() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    let report = engine.analyze(MIXED_TEXT);
    assert!(report
        .iter()
        .all(|result| result.outcome == CategoryOutcome::Completed));
    Ok(())
}

#[test]
fn report_serializes_with_category_order_intact() -> Result<()> {
    let engine = default_engine(AggregationMode::Unique)?;
    let report = engine.analyze("JSON at 10.0.0.1 on 2023-12-31");
    let json = serde_json::to_value(&report)?;
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["category"], "abbreviation");
    assert_eq!(entries[1]["category"], "ip-address");
    assert_eq!(entries[2]["category"], "date");
    Ok(())
}
