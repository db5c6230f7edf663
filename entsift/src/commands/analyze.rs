// entsift/src/commands/analyze.rs
//! Analyze command implementation: runs the engine over a file or stdin
//! and renders the per-category report.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, Read, Write};
use std::time::Duration;

use entsift_core::{
    AggregationMode, AnalysisEngine, EngineOptions, Report, ResultEntry,
};

use crate::cli::{AnalyzeCommand, ModeChoice};
use crate::commands::load_config;

/// Runs the `analyze` command.
pub fn run(cmd: &AnalyzeCommand) -> Result<()> {
    let config = load_config(cmd.config.as_deref())?;

    let options = EngineOptions {
        aggregation: match cmd.mode {
            ModeChoice::Unique => AggregationMode::Unique,
            ModeChoice::Count => AggregationMode::Count,
        },
        category_deadline: cmd
            .deadline_ms
            .map(Duration::from_millis)
            .unwrap_or(entsift_core::DEFAULT_CATEGORY_DEADLINE),
    };

    let engine = AnalysisEngine::with_options(config, options)
        .context("Failed to construct the analysis engine")?;

    let content = read_input(cmd)?;
    info!("Analyzing {} bytes of input.", content.len());
    let report = engine.analyze(&content);

    if cmd.json_stdout {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize report to JSON")?;
        println!("{json}");
    } else if let Some(path) = &cmd.json_file {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize report to JSON")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}.", path.display());
    } else {
        print_report(&mut io::stdout(), &report, io::stdout().is_terminal())?;
    }

    Ok(())
}

/// Reads the input text from the given file, or from stdin when no file
/// was specified.
fn read_input(cmd: &AnalyzeCommand) -> Result<String> {
    match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Renders the report for the console. Colors are applied only when the
/// destination is a terminal.
fn print_report(out: &mut impl Write, report: &Report, color: bool) -> Result<()> {
    if report.is_empty() {
        writeln!(out, "No categories analyzed (input was empty).")?;
        return Ok(());
    }

    for result in report.iter() {
        let header = format!("[{}]", result.category);
        if color {
            write!(out, "{}", header.bold().cyan())?;
        } else {
            write!(out, "{header}")?;
        }

        if result.is_timed_out() {
            let note = " (timed out; matching-time budget exceeded)";
            if color {
                writeln!(out, "{}", note.yellow())?;
            } else {
                writeln!(out, "{note}")?;
            }
            continue;
        }
        writeln!(out)?;

        if result.entry.is_empty() {
            writeln!(out, "  (none)")?;
            continue;
        }
        match &result.entry {
            ResultEntry::Unique(values) => {
                for value in values {
                    writeln!(out, "  {value}")?;
                }
            }
            ResultEntry::Counts(pairs) => {
                for (value, count) in pairs {
                    writeln!(out, "  {value}  x{count}")?;
                }
            }
        }
    }
    Ok(())
}
