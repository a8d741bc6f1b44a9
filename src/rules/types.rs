//! @acp:module "Rule Types"
//! @acp:summary "Rule definitions as stored in the rules directory"
//! @acp:domain cli
//! @acp:layer types

use serde::{Deserialize, Serialize};

/// Selection mode of a rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    #[default]
    SingleSelect,
    MultiSelect,
}

impl RuleKind {
    pub fn is_multi(self) -> bool {
        matches!(self, RuleKind::MultiSelect)
    }
}

/// @acp:summary "One configurable topic presented as a selectable list"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type", default)]
    pub kind: RuleKind,

    /// Options addressed by index. Content may be edited in place during a run.
    pub options: Vec<RuleOption>,
}

impl Rule {
    /// Title used for headings, falling back to the id
    pub fn heading(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.id,
        }
    }
}

/// One concrete, possibly templated choice within a rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleOption {
    pub label: String,

    /// Template text, may contain `{key}` placeholders
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputSpec>,
}

impl RuleOption {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_input(mut self, input: InputSpec) -> Self {
        self.inputs.push(input);
        self
    }
}

/// One named template variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSpec {
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl InputSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: None,
            default: None,
        }
    }

    /// Prompt text, the key itself when none was declared
    pub fn prompt_text(&self) -> &str {
        self.prompt.as_deref().unwrap_or(&self.key)
    }
}
