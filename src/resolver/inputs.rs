//! @acp:module "Input Collector"
//! @acp:summary "Gather template variable values and substitute {key} placeholders"
//! @acp:domain cli
//! @acp:layer logic

use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::prompt::Prompter;
use crate::rules::RuleOption;
use crate::style::Tone;

/// Prompt for each declared input of `option` and return its resolved content.
///
/// Options without inputs come back unchanged. Cancelling any prompt cancels
/// the run.
pub fn collect_inputs<P: Prompter + ?Sized>(option: &RuleOption, prompter: &mut P) -> Result<String> {
    if option.inputs.is_empty() {
        return Ok(option.content.clone());
    }

    prompter.say(Tone::Info, &format!("  > Details needed for {}:", option.label));
    let mut values = Vec::with_capacity(option.inputs.len());
    for input in &option.inputs {
        let initial = input.default.as_deref().unwrap_or("");
        let value = prompter.text(&format!("    {}", input.prompt_text()), initial)?;
        values.push((input.key.as_str(), value.trim().to_string()));
    }

    Ok(substitute(&option.content, &values))
}

/// Replace every exact `{key}` token with its value in a single pass.
///
/// Inserted values are never scanned again, and placeholders without a value
/// are left as they are. If the pattern cannot be built the original content
/// is returned with a warning.
pub fn substitute(content: &str, values: &[(&str, String)]) -> String {
    if values.is_empty() {
        return content.to_string();
    }

    let mut lookup: HashMap<&str, &str> = HashMap::with_capacity(values.len());
    for (key, value) in values {
        lookup.entry(*key).or_insert(value.as_str());
    }
    let alternation: Vec<String> = lookup.keys().map(|k| regex::escape(k)).collect();
    let pattern = format!(r"\{{({})\}}", alternation.join("|"));

    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(content, |caps: &Captures<'_>| {
                lookup.get(&caps[1]).copied().unwrap_or(&caps[0]).to_string()
            })
            .into_owned(),
        Err(e) => {
            tracing::warn!("Template rendering warning: {}", e);
            content.to_string()
        }
    }
}
