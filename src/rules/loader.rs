//! @acp:module "Rule Loader"
//! @acp:summary "Load rule definitions from a directory of JSON/YAML files"
//! @acp:domain cli
//! @acp:layer io

use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;

use super::types::Rule;
use crate::error::{Result, RuleError};

/// On-disk format of a rule file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Json,
    Yaml,
}

impl RuleFormat {
    /// Format from the file extension, case-insensitive. `None` for non-rule files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(RuleFormat::Json),
            "yaml" | "yml" => Some(RuleFormat::Yaml),
            _ => None,
        }
    }
}

/// Load every rule file directly inside `dir`, ordered by file name.
///
/// Invalid records are skipped with a warning; only a missing directory
/// is an error.
pub fn load_rules<P: AsRef<Path>>(dir: P) -> Result<Vec<Rule>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(RuleError::NoRules(dir.to_path_buf()));
    }

    let mut rules = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(format) = RuleFormat::from_path(path) else {
            continue;
        };

        match load_rule_file(path, format) {
            Ok(Some(rule)) => {
                tracing::debug!(id = %rule.id, options = rule.options.len(), "Loaded rule");
                rules.push(rule);
            }
            Ok(None) => {
                tracing::warn!("Skipping invalid rule file: {}", file_name(path));
            }
            Err(e) => {
                tracing::warn!("Error loading {}: {}", file_name(path), e);
            }
        }
    }

    Ok(rules)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse one file. `Ok(None)` means the record lacks a required field.
fn load_rule_file(path: &Path, format: RuleFormat) -> Result<Option<Rule>> {
    let text = std::fs::read_to_string(path)?;
    let value = match format {
        RuleFormat::Json => serde_json::from_str::<Value>(&text)?,
        RuleFormat::Yaml => serde_json::to_value(serde_yaml::from_str::<serde_yaml::Value>(&text)?)?,
    };
    parse_rule(value)
}

/// Minimal presence checks, then typed deserialization
pub fn parse_rule(value: Value) -> Result<Option<Rule>> {
    let has_id = value.get("id").and_then(Value::as_str).is_some();
    let has_options = value
        .get("options")
        .and_then(Value::as_array)
        .map(|opts| !opts.is_empty())
        .unwrap_or(false);
    if !has_id || !has_options {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}
