//! @acp:module "Generate Command"
//! @acp:summary "Interactive rule walk-through producing the rules document"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use console::style;

use crate::config::Config;
use crate::error::Result;
use crate::prompt::TermPrompter;
use crate::session::{run_session, SessionReport};

/// Options for the generate command (CLI overrides on top of the config file)
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub rules_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub no_custom: bool,
}

impl GenerateOptions {
    /// Merge these overrides into `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.rules_dir {
            config.rules_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.no_custom {
            config.allow_custom_rules = false;
        }
        config
    }
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: Config) -> Result<SessionReport> {
    let config = options.apply(config);
    let mut prompter = TermPrompter::new()?;
    let report = run_session(&config, &mut prompter)?;

    println!(
        "\n{} {} rules added, {} skipped, {} custom",
        style("→").dim(),
        report.added.len(),
        report.skipped.len(),
        report.custom.len()
    );
    Ok(report)
}
