//! @acp:module "Init Command"
//! @acp:summary "Create a default config and starter rule definitions"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `rule-master init`.

use std::path::{Path, PathBuf};

use console::style;

use crate::config::Config;
use crate::error::{Result, RuleError};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to write
    pub config_path: PathBuf,
    /// Overwrite an existing config and starter rules
    pub force: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.config_path.exists() && !options.force {
        return Err(RuleError::Other(format!(
            "{} already exists. Use --force to overwrite.",
            options.config_path.display()
        )));
    }

    let config = Config::default();
    config.save(&options.config_path)?;
    println!("{} Created {}", style("✓").green(), options.config_path.display());

    let rules_dir = options
        .config_path
        .parent()
        .map(|p| p.join(&config.rules_dir))
        .unwrap_or_else(|| config.rules_dir.clone());
    let written = write_starter_rules(&rules_dir, options.force)?;
    for path in &written {
        println!("{} Created {}", style("✓").green(), path.display());
    }

    println!("\n{}", style("Next steps:").bold());
    println!("  1. Edit the rule files in {}", style(rules_dir.display()).cyan());
    println!("  2. Run {} to generate your rules document", style("rule-master").cyan());
    Ok(())
}

/// Write the starter rules into `dir`, keeping existing files unless `force`
pub fn write_starter_rules(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (file, body) in STARTER_RULES {
        let path = dir.join(file);
        if path.exists() && !force {
            tracing::info!("Keeping existing {}", path.display());
            continue;
        }
        std::fs::write(&path, body)?;
        written.push(path);
    }
    Ok(written)
}

/// Starter rules, compiled in from the bundled `rules/` directory
const STARTER_RULES: &[(&str, &str)] = &[
    ("01-style.json", include_str!("../../rules/01-style.json")),
    ("02-checks.json", include_str!("../../rules/02-checks.json")),
    ("03-commits.yaml", include_str!("../../rules/03-commits.yaml")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::load_rules;

    #[test]
    fn test_starter_rules_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_starter_rules(dir.path(), false).unwrap();
        assert_eq!(written.len(), STARTER_RULES.len());
        let rules = load_rules(dir.path()).unwrap();
        let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["style", "checks", "commits"]);
        assert!(rules[1].kind.is_multi());
        assert_eq!(rules[0].options[1].inputs[0].key, "width");
    }

    #[test]
    fn test_existing_rules_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("01-style.json"), "{}").unwrap();
        let written = write_starter_rules(dir.path(), false).unwrap();
        assert_eq!(
            written,
            vec![dir.path().join("02-checks.json"), dir.path().join("03-commits.yaml")]
        );
        assert_eq!(std::fs::read_to_string(dir.path().join("01-style.json")).unwrap(), "{}");
    }

    #[test]
    fn test_init_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".rule-master.json");
        std::fs::write(&config_path, "{}").unwrap();
        let err = execute_init(InitOptions { config_path: config_path.clone(), force: false }).unwrap_err();
        assert!(matches!(err, RuleError::Other(_)));

        execute_init(InitOptions { config_path, force: true }).unwrap();
        assert!(dir.path().join("rules").join("01-style.json").exists());
    }

    #[test]
    fn test_force_replaces_unparseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".rule-master.json");
        std::fs::write(&config_path, "{ not json").unwrap();
        assert!(Config::load(&config_path).is_err());

        execute_init(InitOptions { config_path: config_path.clone(), force: true }).unwrap();
        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.rules_dir, Config::default().rules_dir);
    }
}
