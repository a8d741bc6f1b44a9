//! @acp:module "List Command"
//! @acp:summary "Print the loaded rules without starting a session"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use console::style;

use crate::config::Config;
use crate::error::Result;
use crate::rules::{load_rules, Rule};
use crate::style::{paint, Tone};

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub rules_dir: Option<PathBuf>,
}

/// Execute the list command
pub fn execute_list(options: ListOptions, config: &Config) -> Result<()> {
    let dir = options.rules_dir.unwrap_or_else(|| config.rules_dir.clone());
    let rules = load_rules(&dir)?;
    if rules.is_empty() {
        println!("{}", paint(Tone::Warning, &format!("No rules in {}", dir.display())));
        return Ok(());
    }
    for rule in &rules {
        println!("{}", summarize(rule));
    }
    println!("\n{} {} rules", style("→").dim(), rules.len());
    Ok(())
}

fn summarize(rule: &Rule) -> String {
    let kind = if rule.kind.is_multi() { "multi" } else { "single" };
    let labels: Vec<&str> = rule.options.iter().map(|o| o.label.as_str()).collect();
    format!(
        "{} {} [{}]: {}",
        style(&rule.id).cyan(),
        rule.heading(),
        kind,
        labels.join(", ")
    )
}
