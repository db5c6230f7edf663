// entsift/src/commands/rules.rs
//! Rules command implementation: lists the registered categories with
//! their patterns and validators.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use entsift_core::{get_or_compile_rules, Registry};

use crate::cli::RulesCommand;
use crate::commands::load_config;

/// Runs the `rules` command.
pub fn run(cmd: &RulesCommand) -> Result<()> {
    let config = load_config(cmd.config.as_deref())?;
    let registry = get_or_compile_rules(&config).context("Failed to compile extraction rules")?;
    print_rules(&mut io::stdout(), &registry, io::stdout().is_terminal())?;
    Ok(())
}

fn print_rules(out: &mut impl Write, registry: &Registry, color: bool) -> Result<()> {
    for rule in &registry.rules {
        let name = if color {
            rule.category.bold().cyan().to_string()
        } else {
            rule.category.clone()
        };
        let validator = rule
            .validator
            .map(|kind| kind.name())
            .unwrap_or("(accept all)");
        let status = if rule.enabled { "" } else { "  [disabled]" };
        writeln!(out, "{name}{status}")?;
        writeln!(out, "  validator: {validator}")?;
        writeln!(out, "  pattern:   {}", rule.regex.as_str())?;
    }
    Ok(())
}
