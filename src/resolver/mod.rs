//! @acp:module "Resolver"
//! @acp:summary "Drive one rule through the selector and produce its resolved text"
//! @acp:domain cli
//! @acp:layer logic
//!
//! # Resolution loop
//!
//! 1. Entries are the rule's options followed by the `Custom` and `Skip`
//!    pseudo-choices. `Skip` is always offered.
//! 2. The selector runs in the rule's mode. An edit request rewrites the
//!    option's content in place and starts a new pass, seeded with the
//!    previous cursor and selection. Cancel aborts the run.
//! 3. Confirming `Skip` discards everything else confirmed with it.
//! 4. Survivors are turned into text (free text for `Custom`, input
//!    substitution for real options) and joined under a `## <title>` heading.
//!
//! Edits live in the in-memory [`Rule`] for the rest of the run and are
//! never written back to the rule files.

pub mod inputs;

pub use inputs::{collect_inputs, substitute};

use std::collections::BTreeSet;

use crate::error::{Result, RuleError};
use crate::prompt::Prompter;
use crate::rules::{Rule, RuleOption};
use crate::selector::{Entry, Mode, SelectionOutcome, Selector};
use crate::style::Tone;

/// Title shown above the option list
pub const SELECT_TITLE: &str = "Choose an option (arrow keys to move):";
pub const CUSTOM_LABEL: &str = "Custom content (manual entry)";
pub const SKIP_LABEL: &str = "Skip this rule";
pub const CUSTOM_DETAIL: &str = "Enter custom rule content manually.";
pub const SKIP_DETAIL: &str = "Skip configuring this rule.";
const NO_DESCRIPTION: &str = "No description available.";

/// Default number of content characters shown in a detail preview
pub const DEFAULT_PREVIEW_LEN: usize = 200;

/// What an entry in the selector stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Index into `Rule::options`
    Real(usize),
    Custom,
    Skip,
}

/// @acp:summary "Per-rule control loop over selection, editing and substitution"
pub struct Resolver<'p, P: Prompter + ?Sized> {
    prompter: &'p mut P,
    preview_len: usize,
}

impl<'p, P: Prompter + ?Sized> Resolver<'p, P> {
    pub fn new(prompter: &'p mut P) -> Self {
        Self {
            prompter,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }

    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len;
        self
    }

    /// Resolve `rule` to its document block, or an empty string when it
    /// contributes nothing.
    pub fn resolve(&mut self, rule: &mut Rule) -> Result<String> {
        let choices = self.select(rule)?;

        if choices.contains(&Choice::Skip) {
            if choices.len() > 1 {
                tracing::debug!(
                    rule = %rule.id,
                    dropped = choices.len() - 1,
                    "Skip confirmed together with other entries"
                );
            }
            return Ok(String::new());
        }

        let mut contents = Vec::with_capacity(choices.len());
        for choice in choices {
            match choice {
                Choice::Custom => {
                    let text = self
                        .prompter
                        .text("Enter custom content (Markdown supported)", "")?;
                    if !text.is_empty() {
                        self.prompter.say(Tone::Success, "Custom content added");
                        contents.push(text);
                    }
                }
                Choice::Real(idx) => {
                    let option = &rule.options[idx];
                    self.prompter
                        .say(Tone::Success, &format!("Selected: {}", option.label));
                    contents.push(collect_inputs(option, &mut *self.prompter)?);
                }
                Choice::Skip => {}
            }
        }

        if contents.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("## {}\n{}", rule.heading(), contents.join("\n\n")))
    }

    /// Run selector passes until one confirms, applying edits in between
    fn select(&mut self, rule: &mut Rule) -> Result<Vec<Choice>> {
        let mode = if rule.kind.is_multi() { Mode::Multi } else { Mode::Single };
        let mut cursor = 0;
        let mut selection = BTreeSet::new();

        loop {
            let entries = build_entries(rule, self.preview_len);
            let mut selector = Selector::new(SELECT_TITLE, &entries, mode)
                .with_cursor(cursor)
                .with_selection(selection.iter().copied());

            match selector.run(&mut *self.prompter)? {
                SelectionOutcome::Cancelled => return Err(RuleError::Cancelled),
                SelectionOutcome::EditRequested(i) => {
                    cursor = selector.cursor();
                    selection = selector.selection().clone();
                    if let Choice::Real(idx) = entries[i].value {
                        self.edit_option(&mut rule.options[idx])?;
                    }
                }
                SelectionOutcome::Confirmed(indices) => {
                    return Ok(indices.into_iter().map(|i| entries[i].value).collect());
                }
            }
        }
    }

    fn edit_option(&mut self, option: &mut RuleOption) -> Result<()> {
        let prompt = format!("Edit content of '{}' (Enter to save)", option.label);
        let updated = self.prompter.text(&prompt, &option.content)?;
        tracing::debug!(label = %option.label, "Option content edited");
        option.content = updated;
        self.prompter.say(Tone::Success, "Content updated");
        Ok(())
    }
}

/// Selector entries for `rule`: its options, then `Custom`, then `Skip`
pub fn build_entries(rule: &Rule, preview_len: usize) -> Vec<Entry<Choice>> {
    let mut entries: Vec<Entry<Choice>> = rule
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            Entry::new(Choice::Real(i), option.label.clone())
                .detail(option_detail(option, preview_len))
                .editable(true)
        })
        .collect();
    entries.push(Entry::new(Choice::Custom, CUSTOM_LABEL).detail(CUSTOM_DETAIL));
    entries.push(Entry::new(Choice::Skip, SKIP_LABEL).detail(SKIP_DETAIL));
    entries
}

/// Description plus a bounded preview of the current content
fn option_detail(option: &RuleOption, preview_len: usize) -> String {
    let mut detail = if option.description.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        option.description.clone()
    };
    if !option.content.is_empty() {
        let preview: String = option.content.chars().take(preview_len).collect();
        detail.push_str("\n\nContent Preview:\n");
        detail.push_str(&preview);
        if option.content.chars().count() > preview_len {
            detail.push_str("...");
        }
    }
    detail
}
