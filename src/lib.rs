//! Rebrand - rule-driven rebranding of file trees
//!
//! This library walks a source directory, applies an ordered set of
//! string/regex replacement rules to file contents (and optionally to
//! relative paths), and writes the results to a destination tree with
//! dry-run preview and overwrite protection.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod engine;
pub mod output;
pub mod patterns;
pub mod rules;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RebrandError {
    /// Name pattern error (bad exclude specification)
    #[error("Pattern error: {0}")]
    PatternError(#[from] patterns::PatternError),
    /// Replacement rule error (bad renaming specification)
    #[error("Rule error: {0}")]
    RuleError(#[from] rules::RuleError),
    /// Engine error (traversal or transfer failure)
    #[error("Engine error: {0}")]
    EngineError(#[from] engine::EngineError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serialization error for the JSON run summary
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
