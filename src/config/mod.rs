//! @acp:module "Configuration"
//! @acp:summary "Generator configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::resolver::DEFAULT_PREVIEW_LEN;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".rule-master.json";

/// @acp:summary "Main generator configuration"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding rule definition files
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,

    /// Generated document path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// First-level heading of the generated document
    #[serde(default = "default_document_title")]
    pub document_title: String,

    /// Marker line placed under the title
    #[serde(default = "default_generator_marker")]
    pub generator_marker: String,

    /// Content characters shown in option detail previews
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,

    /// Offer the custom-rule appendix after all rules are resolved
    #[serde(default = "default_true")]
    pub allow_custom_rules: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            output: default_output(),
            document_title: default_document_title(),
            generator_marker: default_generator_marker(),
            preview_len: default_preview_len(),
            allow_custom_rules: true,
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` when it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from("rules")
}

fn default_output() -> PathBuf {
    PathBuf::from("rule.md")
}

fn default_document_title() -> String {
    "Project Rules".to_string()
}

fn default_generator_marker() -> String {
    "Generated by Rule Master".to_string()
}

fn default_preview_len() -> usize {
    DEFAULT_PREVIEW_LEN
}

fn default_true() -> bool {
    true
}
