#![forbid(unsafe_code)]

//! @acp:module "Rule Master Library"
//! @acp:summary "Interactive rule selection and rules-document generation"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Rule Master
//!
//! Walks an operator through a directory of predefined rules, one selectable
//! list per rule, and assembles the chosen options into a single markdown
//! document.
//!
//! ## Features
//!
//! - **Single and multi select**: every rule picks its mode
//! - **Templated options**: `{key}` placeholders filled in at selection time
//! - **In-place editing**: tweak an option's text before choosing it
//! - **Custom and skip**: always available for every rule
//!
//! ## Example
//!
//! ```rust,no_run
//! use rulemaster::{run_session, Config, TermPrompter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut prompter = TermPrompter::new()?;
//!     let report = run_session(&config, &mut prompter)?;
//!     println!("wrote {}", report.output.display());
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod prompt;
pub mod resolver;
pub mod rules;
pub mod selector;
pub mod session;
pub mod style;

// Re-exports
pub use config::Config;
pub use document::Document;
pub use error::{Result, RuleError};
pub use prompt::{Prompter, Reply, ScriptedPrompter, TermPrompter};
pub use resolver::{collect_inputs, substitute, Choice, Resolver};
pub use rules::{load_rules, InputSpec, Rule, RuleKind, RuleOption};
pub use selector::{Action, Entry, Frame, Mode, SelectionOutcome, Selector};
pub use session::{run_session, SessionReport};
pub use style::{paint, Tone};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
