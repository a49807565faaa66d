//! Error types for name pattern construction

use thiserror::Error;

/// Errors that can occur while building name patterns
#[derive(Debug, Error)]
pub enum PatternError {
    /// Empty pattern specification
    #[error("Empty pattern specification")]
    InvalidEmpty,

    /// Regex pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {message}")]
    RegexCompile { pattern: String, message: String },

    /// Glob pattern failed to parse
    #[error("Invalid glob pattern '{pattern}': {message}")]
    GlobParse { pattern: String, message: String },
}

impl PatternError {
    pub(crate) fn regex_compile(pattern: &str, message: &str) -> Self {
        Self::RegexCompile {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn glob_parse(pattern: &str, message: &str) -> Self {
        Self::GlobParse {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }
}
