//! Session integration tests
//!
//! Drive complete generator runs through a scripted prompter against
//! rule files in a temporary directory.

use std::fs;
use std::path::Path;

use console::Key;
use rulemaster::{run_session, Config, RuleError, ScriptedPrompter, Tone};
use tempfile::TempDir;

fn workspace(rules: &[(&str, &str)]) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let rules_dir = dir.path().join("rules");
    fs::create_dir(&rules_dir).unwrap();
    for (name, body) in rules {
        fs::write(rules_dir.join(name), body).unwrap();
    }
    let config = Config {
        rules_dir,
        output: dir.path().join("out").join("rule.md"),
        ..Default::default()
    };
    (dir, config)
}

const STYLE: &str = r#"{
    "id": "style",
    "title": "style",
    "options": [
        {"label": "tabs", "content": "Use tabs"},
        {"label": "spaces", "content": "Use spaces"}
    ]
}"#;

const LINT: &str = r#"{
    "id": "lint",
    "title": "lint",
    "type": "multi_select",
    "options": [
        {"label": "A", "content": "Run clippy"},
        {"label": "B", "content": "Use {tool} for formatting", "inputs": [{"key": "tool", "default": "rustfmt"}]}
    ]
}"#;

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// Complete runs
// =============================================================================

mod complete_runs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_session_writes_document() {
        let (_dir, config) = workspace(&[("10-style.json", STYLE), ("20-lint.json", LINT)]);
        let mut prompter = ScriptedPrompter::new()
            // style: spaces
            .keys([Key::ArrowDown, Key::Enter])
            // lint: A and B, accept the default tool
            .keys([Key::Char(' '), Key::ArrowDown, Key::Char(' '), Key::Enter])
            .accept()
            // one custom rule, then stop
            .yes()
            .answer("Commits")
            .answer("Use conventional commits")
            .no();

        let report = run_session(&config, &mut prompter).unwrap();
        assert_eq!(report.added, vec!["style", "lint"]);
        assert!(report.skipped.is_empty());
        assert_eq!(report.custom, vec!["Commits"]);
        assert_eq!(prompter.remaining(), 0);

        assert_eq!(
            read(&config.output),
            "# Project Rules\n\n\
             > Generated by Rule Master\n\n\
             ## style\nUse spaces\n\
             ## lint\nRun clippy\n\nUse rustfmt for formatting\n\
             ## Commits\n\nUse conventional commits"
        );
    }

    #[test]
    fn test_skipped_rules_are_left_out() {
        let (_dir, config) = workspace(&[("10-style.json", STYLE), ("20-lint.json", LINT)]);
        let mut prompter = ScriptedPrompter::new()
            // style: skip (last entry)
            .keys([Key::ArrowUp, Key::Enter])
            // lint: A plus Skip, skip wins
            .keys([Key::Char(' '), Key::ArrowUp, Key::Char(' '), Key::Enter])
            .no();

        let report = run_session(&config, &mut prompter).unwrap();
        assert!(report.added.is_empty());
        assert_eq!(report.skipped, vec!["style", "lint"]);
        assert_eq!(read(&config.output), "# Project Rules\n\n> Generated by Rule Master\n");
        assert!(prompter
            .messages
            .iter()
            .any(|(tone, msg)| *tone == Tone::Warning && msg.starts_with("Nothing selected")));
    }

    #[test]
    fn test_custom_rules_disabled() {
        let (_dir, mut config) = workspace(&[("10-style.json", STYLE)]);
        config.allow_custom_rules = false;
        let mut prompter = ScriptedPrompter::new().key(Key::Enter);

        run_session(&config, &mut prompter).unwrap();
        assert!(prompter.prompts.is_empty());
        assert!(read(&config.output).ends_with("## style\nUse tabs"));
    }

    #[test]
    fn test_blank_custom_title_is_ignored() {
        let (_dir, config) = workspace(&[("10-style.json", STYLE)]);
        let mut prompter = ScriptedPrompter::new()
            .key(Key::Enter)
            .yes()
            .answer("   ")
            .no();

        let report = run_session(&config, &mut prompter).unwrap();
        assert!(report.custom.is_empty());
    }

    #[test]
    fn test_invalid_rule_files_are_skipped() {
        let (_dir, config) = workspace(&[
            ("10-style.json", STYLE),
            ("15-no-id.json", r#"{"options": [{"label": "x", "content": "x"}]}"#),
        ]);
        let mut prompter = ScriptedPrompter::new().key(Key::Enter).no();

        let report = run_session(&config, &mut prompter).unwrap();
        assert_eq!(report.added, vec!["style"]);
    }

    #[test]
    fn test_edit_is_used_in_output() {
        let (_dir, config) = workspace(&[("10-style.json", STYLE)]);
        let mut prompter = ScriptedPrompter::new()
            .key(Key::Char('e'))
            .answer("Use tabs, width 8")
            .key(Key::Enter)
            .no();

        run_session(&config, &mut prompter).unwrap();
        assert!(read(&config.output).ends_with("## style\nUse tabs, width 8"));
        // rule files are never rewritten
        assert_eq!(read(&config.rules_dir.join("10-style.json")), STYLE);
    }
}

// =============================================================================
// Cancellation and failures
// =============================================================================

mod cancellation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cancel_in_selector_writes_nothing() {
        let (_dir, config) = workspace(&[("10-style.json", STYLE), ("20-lint.json", LINT)]);
        let mut prompter = ScriptedPrompter::new()
            .keys([Key::Enter])
            .key(Key::Escape);

        let err = run_session(&config, &mut prompter).unwrap_err();
        assert!(err.is_cancelled());
        assert!(!config.output.exists());
    }

    #[test]
    fn test_cancel_in_input_prompt_writes_nothing() {
        let (_dir, config) = workspace(&[("20-lint.json", LINT)]);
        let mut prompter = ScriptedPrompter::new()
            .keys([Key::ArrowDown, Key::Char(' '), Key::Enter])
            .cancel();

        assert!(run_session(&config, &mut prompter).unwrap_err().is_cancelled());
        assert!(!config.output.exists());
    }

    #[test]
    fn test_cancel_in_custom_appendix_writes_nothing() {
        let (_dir, config) = workspace(&[("10-style.json", STYLE)]);
        let mut prompter = ScriptedPrompter::new().key(Key::Enter).yes().answer("Title").cancel();

        assert!(run_session(&config, &mut prompter).unwrap_err().is_cancelled());
        assert!(!config.output.exists());
    }

    #[test]
    fn test_empty_rules_directory() {
        let (_dir, config) = workspace(&[]);
        let mut prompter = ScriptedPrompter::new();
        let err = run_session(&config, &mut prompter).unwrap_err();
        assert!(matches!(err, RuleError::NoRules(_)));
        let warnings: Vec<&str> = prompter
            .messages
            .iter()
            .filter(|(tone, _)| *tone == Tone::Warning)
            .map(|(_, msg)| msg.as_str())
            .collect();
        assert_eq!(
            warnings,
            vec![format!("No rule definitions found in {}", config.rules_dir.display())]
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let (dir, mut config) = workspace(&[("10-style.json", STYLE)]);
        // a directory where the file should go
        let blocked = dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();
        config.output = blocked;
        let mut prompter = ScriptedPrompter::new().key(Key::Enter).no();

        let err = run_session(&config, &mut prompter).unwrap_err();
        assert!(matches!(err, RuleError::Io(_)));
        assert!(prompter.messages.iter().any(|(tone, _)| *tone == Tone::Failure));
    }
}
