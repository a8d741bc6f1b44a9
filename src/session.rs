//! @acp:module "Session"
//! @acp:summary "Full interactive run: load rules, resolve each, append custom rules, write once"
//! @acp:domain cli
//! @acp:layer service

use std::path::PathBuf;

use crate::config::Config;
use crate::document::Document;
use crate::error::{Result, RuleError};
use crate::prompt::Prompter;
use crate::resolver::Resolver;
use crate::rules::load_rules;
use crate::style::Tone;

/// Summary of a completed session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub output: PathBuf,
    /// Ids of rules that contributed a block
    pub added: Vec<String>,
    /// Ids of rules that contributed nothing
    pub skipped: Vec<String>,
    /// Titles of operator-written rules
    pub custom: Vec<String>,
}

/// @acp:summary "Run the whole generator conversation"
///
/// The document is written exactly once, after every prompt has been
/// answered. A cancellation anywhere returns `RuleError::Cancelled` and
/// leaves the output file untouched.
pub fn run_session<P: Prompter + ?Sized>(config: &Config, prompter: &mut P) -> Result<SessionReport> {
    prompter.say(Tone::Header, "Rule Master - coding rules generator");
    prompter.say(
        Tone::Info,
        &format!("Generating {} step by step...", config.output.display()),
    );

    let mut rules = load_rules(&config.rules_dir)?;
    if rules.is_empty() {
        prompter.say(
            Tone::Warning,
            &format!("No rule definitions found in {}", config.rules_dir.display()),
        );
        return Err(RuleError::NoRules(config.rules_dir.clone()));
    }
    tracing::debug!("Loaded {} rules from {}", rules.len(), config.rules_dir.display());

    let mut document = Document::new(&config.document_title, &config.generator_marker);
    let mut report = SessionReport {
        output: config.output.clone(),
        ..Default::default()
    };

    for rule in rules.iter_mut() {
        prompter.say(Tone::Header, rule.heading());
        if !rule.description.is_empty() {
            prompter.say(Tone::Info, &rule.description);
        }

        let text = Resolver::new(&mut *prompter)
            .with_preview_len(config.preview_len)
            .resolve(rule)?;

        if text.is_empty() {
            prompter.say(Tone::Info, "Rule skipped.");
            report.skipped.push(rule.id.clone());
        } else {
            document.push_rule(&text);
            prompter.say(Tone::Success, "Rule added.");
            report.added.push(rule.id.clone());
        }
    }

    if config.allow_custom_rules {
        prompter.say(Tone::Header, "Custom Rules");
        while prompter.confirm("Add a custom rule?", false)? {
            let title = prompter.text("Rule title (e.g. 'My Custom Rule')", "")?;
            let title = title.trim();
            if title.is_empty() {
                continue;
            }
            let body = prompter.text("Rule content (Markdown supported)", "")?;
            if body.is_empty() {
                continue;
            }
            document.push_custom(title, &body);
            prompter.say(Tone::Success, &format!("Custom rule added: {}", title));
            report.custom.push(title.to_string());
        }
    }

    if document.block_count() == 0 {
        prompter.say(Tone::Warning, "Nothing selected, the document only has its header.");
    }
    if let Err(e) = document.write(&config.output) {
        prompter.say(Tone::Failure, &format!("Failed to write file: {}", e));
        return Err(e);
    }
    prompter.say(Tone::Header, "Done");
    prompter.say(
        Tone::Success,
        &format!("File generated: {}", config.output.display()),
    );

    Ok(report)
}
