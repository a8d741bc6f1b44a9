//! @acp:module "Rules"
//! @acp:summary "Rule store: definitions and directory loading"
//! @acp:domain cli
//! @acp:layer feature

pub mod loader;
pub mod types;

pub use loader::{load_rules, parse_rule, RuleFormat};
pub use types::*;
