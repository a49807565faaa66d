//! Name matchers for exclusion decisions
//!
//! A [`NamePattern`] tests a bare file or directory name (the final path
//! segment, never a full path), so an exclusion rule behaves identically at
//! any nesting depth. Patterns are built once from configuration and are
//! pure and stateless afterwards.
//!
//! # Specification syntax
//!
//! - `name` — exact match
//! - `name*` — prefix match
//! - `*name` — suffix match
//! - `r/expr` — regex full match
//! - `g/expr` — glob match
//! - `auto` — expands to a built-in list (see [`AUTO_EXCLUDES`] and
//!   [`AUTO_FILTERING`]), overridable in the user configuration

pub mod error;

pub use error::PatternError;

use glob::Pattern as GlobPattern;
use regex::Regex;
use std::fmt;

/// Bare names expanded by `--exclude auto`: VCS/IDE/build directories and
/// generated artifacts that should never be traversed.
pub const AUTO_EXCLUDES: &[&str] = &[
    "node_modules",
    ".idea",
    "target",
    ".project",
    ".classpath",
    ".settings",
    ".factorypath",
    ".vscode",
    "generated",
    ".cache",
    ".node",
    "screenshots",
    "derby.log",
    "release.properties",
    "*.releaseBackup",
    ".git",
    "*.iml",
    "*.ipr",
    "*.iws",
    "*.mp4",
];

/// File names expanded by `--exclude-filtering auto`: binary assets that
/// must be copied byte-for-byte instead of rewritten.
pub const AUTO_FILTERING: &[&str] = &[
    "*.so", "*.png", "*.svg", "*.gif", "*.jpeg", "*.jpg", "*.xsl", "*.xslx", "*.ico", "*.ttf",
    "*.woff", "*.woff2", "*.eot", "*.otf",
];

/// Matcher over a bare file or directory name
#[derive(Debug, Clone)]
pub enum NamePattern {
    Exact(String),
    Prefix(String),
    Suffix(String),
    Regex { original: String, compiled: Regex },
    Glob { original: String, spec: GlobPattern },
}

impl NamePattern {
    /// Construct an exact-equality pattern.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidEmpty` if `name` is empty.
    pub fn exact(name: &str) -> Result<Self, PatternError> {
        if name.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        Ok(Self::Exact(name.to_string()))
    }

    /// Construct a prefix pattern.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidEmpty` if `prefix` is empty.
    pub fn prefix(prefix: &str) -> Result<Self, PatternError> {
        if prefix.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        Ok(Self::Prefix(prefix.to_string()))
    }

    /// Construct a suffix pattern.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidEmpty` if `suffix` is empty.
    pub fn suffix(suffix: &str) -> Result<Self, PatternError> {
        if suffix.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        Ok(Self::Suffix(suffix.to_string()))
    }

    /// Construct a regex pattern. The expression must match the entire
    /// name, not a substring of it.
    ///
    /// # Errors
    /// * Returns `PatternError::InvalidEmpty` if `p` is empty.
    /// * Returns `PatternError::RegexCompile` if the regex fails to compile.
    pub fn regex(p: &str) -> Result<Self, PatternError> {
        if p.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        // Anchor for full-name matching
        Regex::new(&format!(r"\A(?:{p})\z"))
            .map(|r| Self::Regex {
                original: p.to_string(),
                compiled: r,
            })
            .map_err(|e| PatternError::regex_compile(p, &e.to_string()))
    }

    /// Construct a glob pattern.
    ///
    /// # Errors
    /// * Returns `PatternError::InvalidEmpty` if `p` is empty.
    /// * Returns `PatternError::GlobParse` if the glob specification is invalid.
    pub fn glob(p: &str) -> Result<Self, PatternError> {
        if p.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        GlobPattern::new(p)
            .map(|g| Self::Glob {
                original: p.to_string(),
                spec: g,
            })
            .map_err(|e| PatternError::glob_parse(p, &e.to_string()))
    }

    /// Parse a command-line pattern specification (see module docs for the
    /// syntax). `auto` is expanded by [`PatternSet::from_specs`] before this
    /// is called.
    ///
    /// # Errors
    /// Returns `PatternError` for empty or malformed specifications.
    pub fn parse(spec: &str) -> Result<Self, PatternError> {
        if spec.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        if let Some(expr) = spec.strip_prefix("r/") {
            Self::regex(expr)
        } else if let Some(expr) = spec.strip_prefix("g/") {
            Self::glob(expr)
        } else if let Some(suffix) = spec.strip_prefix('*') {
            Self::suffix(suffix)
        } else if let Some(prefix) = spec.strip_suffix('*') {
            Self::prefix(prefix)
        } else {
            Self::exact(spec)
        }
    }

    /// Test a bare name against this pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(value) => name == value,
            Self::Prefix(prefix) => name.starts_with(prefix),
            Self::Suffix(suffix) => name.ends_with(suffix),
            Self::Regex { compiled, .. } => compiled.is_match(name),
            Self::Glob { spec, .. } => spec.matches(name),
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "{value}"),
            Self::Prefix(prefix) => write!(f, "{prefix}*"),
            Self::Suffix(suffix) => write!(f, "*{suffix}"),
            Self::Regex { original, .. } => write!(f, "r/{original}"),
            Self::Glob { original, .. } => write!(f, "g/{original}"),
        }
    }
}

/// An immutable set of name patterns; a name matches the set when it
/// matches any member.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<NamePattern>,
}

impl PatternSet {
    #[must_use]
    pub fn new(patterns: Vec<NamePattern>) -> Self {
        Self { patterns }
    }

    /// Build a set from command-line specifications, expanding each `auto`
    /// entry into `auto_specs` (the built-in or user-configured list).
    ///
    /// # Errors
    /// Returns `PatternError` for any malformed specification.
    pub fn from_specs(specs: &[String], auto_specs: &[String]) -> Result<Self, PatternError> {
        let mut patterns = Vec::new();
        for spec in specs {
            if spec == "auto" {
                for auto in auto_specs {
                    patterns.push(NamePattern::parse(auto)?);
                }
            } else {
                patterns.push(NamePattern::parse(spec)?);
            }
        }
        Ok(Self::new(patterns))
    }

    /// Test a bare name against every pattern in the set.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specs: Vec<String> = self.patterns.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", specs.join(", "))
    }
}
