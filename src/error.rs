//! @acp:module "Errors"
//! @acp:summary "Error types for rule loading, prompting and document output"
//! @acp:domain cli
//! @acp:layer types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// @acp:summary "Crate-wide error type"
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The operator aborted at a prompt. Fatal to the whole run.
    #[error("Cancelled by user")]
    Cancelled,

    #[error("No rule definitions found in {}", .0.display())]
    NoRules(PathBuf),

    #[error("{0}")]
    Other(String),
}

impl RuleError {
    /// True when the run ended because the operator cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RuleError::Cancelled)
    }

    /// Map a terminal IO failure, treating Ctrl-C as cancellation
    pub fn from_terminal(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            RuleError::Cancelled
        } else {
            RuleError::Io(err)
        }
    }
}

impl From<dialoguer::Error> for RuleError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) => RuleError::from_terminal(io),
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        let err = RuleError::from_terminal(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"));
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_other_io_is_not_cancelled() {
        let err = RuleError::from_terminal(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(matches!(err, RuleError::Io(_)));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_dialoguer_interrupt_maps_to_cancelled() {
        let err: RuleError =
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "^C")).into();
        assert!(err.is_cancelled());
    }
}
