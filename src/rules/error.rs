//! Error types for replacement rule parsing

use thiserror::Error;

/// Errors that can occur while parsing renaming rules
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule specification has no `=` separator
    #[error("Invalid renaming rule '{0}': expected <before>=<after>[?ext=java,ts][&cases]")]
    MissingSeparator(String),

    /// Rule specification has an empty `before` side
    #[error("Invalid renaming rule '{0}': the <before> side is empty")]
    EmptySource(String),

    /// Unknown rule parameter after `?`
    #[error("Unsupported parameter '{param}' in rule '{spec}': only ext= and cases are supported")]
    UnsupportedParameter { spec: String, param: String },

    /// Regex source side failed to compile
    #[error("Invalid regex in rule '{spec}': {message}")]
    RegexCompile { spec: String, message: String },

    /// `cases` expansion only applies to literal rules
    #[error("Invalid renaming rule '{0}': cases expansion requires a literal rule, not r/")]
    CasesWithRegex(String),
}
