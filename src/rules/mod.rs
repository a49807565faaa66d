//! Ordered replacement pipeline
//!
//! A [`RuleSet`] is an ordered sequence of replacement rules applied to file
//! content, and — when folder renaming is active — to relative path strings.
//! Rules run in declaration order and each rule's output feeds the next
//! rule's input, so later rules can rewrite earlier results.
//!
//! # Specification syntax
//!
//! `<before>=<after>[?ext=java,ts][&cases]`
//!
//! - `before` is a literal substring, or `r/expr` for a regex whose
//!   replacement side may use `$1` capture-group substitution
//! - `ext=` restricts the rule to filenames with one of the extensions;
//!   extension-filtered rules never fire for path rewriting, where the
//!   filename key is empty
//! - `cases` expands a literal rule into snake/kebab/camel/Pascal/SHOUTY
//!   variants of both sides

pub mod error;

pub use error::RuleError;

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use regex::Regex;
use std::fmt;

/// Applicability filter over the bare filename
#[derive(Debug, Clone)]
pub enum RuleFilter {
    /// Applies to every filename, including the empty path-rewrite key
    Always,
    /// Applies only when the filename carries one of these extensions
    Extensions(Vec<String>),
}

impl RuleFilter {
    /// Test whether a rule guarded by this filter fires for `filename`.
    #[must_use]
    pub fn applies(&self, filename: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Extensions(exts) => match filename.rfind('.') {
                // dot at position 0 is a hidden file, not an extension
                Some(dot) if dot > 0 => exts.iter().any(|e| e == &filename[dot + 1..]),
                _ => false,
            },
        }
    }
}

/// Text transformation applied by a rule
#[derive(Debug, Clone)]
pub enum Transform {
    /// Replace every occurrence of `from` with `to`
    Literal { from: String, to: String },
    /// Replace every regex match, substituting capture groups into `replacement`
    Regex { pattern: Regex, replacement: String },
}

impl Transform {
    fn apply(&self, text: &str) -> String {
        match self {
            Self::Literal { from, to } => text.replace(from, to),
            Self::Regex {
                pattern,
                replacement,
            } => pattern.replace_all(text, replacement.as_str()).into_owned(),
        }
    }
}

/// A single replacement rule: an optional filename filter and a transform
#[derive(Debug, Clone)]
pub struct Rule {
    filter: RuleFilter,
    transform: Transform,
}

impl Rule {
    #[must_use]
    pub fn new(filter: RuleFilter, transform: Transform) -> Self {
        Self { filter, transform }
    }

    /// Apply this rule to `text`, using `filename` only for the filter
    /// decision. A non-firing rule returns the input unchanged.
    #[must_use]
    pub fn apply(&self, filename: &str, text: &str) -> String {
        if !self.filter.applies(filename) {
            return text.to_string();
        }
        self.transform.apply(text)
    }

    /// Parse one rule specification. A `cases` parameter expands the spec
    /// into several rules, so this returns a list.
    ///
    /// # Errors
    /// Returns `RuleError` for malformed specifications.
    pub fn parse(spec: &str) -> Result<Vec<Self>, RuleError> {
        let (body, params) = match spec.rfind('?') {
            Some(q) => (&spec[..q], RuleParams::parse(spec, &spec[q + 1..])?),
            None => (spec, RuleParams::default()),
        };

        let split = body
            .find('=')
            .ok_or_else(|| RuleError::MissingSeparator(spec.to_string()))?;
        let source = &body[..split];
        let target = &body[split + 1..];
        if source.is_empty() {
            return Err(RuleError::EmptySource(spec.to_string()));
        }

        let filter = match params.extensions {
            Some(exts) => RuleFilter::Extensions(exts),
            None => RuleFilter::Always,
        };

        if let Some(expr) = source.strip_prefix("r/") {
            if params.cases {
                return Err(RuleError::CasesWithRegex(spec.to_string()));
            }
            let pattern = Regex::new(expr).map_err(|e| RuleError::RegexCompile {
                spec: spec.to_string(),
                message: e.to_string(),
            })?;
            return Ok(vec![Self::new(
                filter,
                Transform::Regex {
                    pattern,
                    replacement: target.to_string(),
                },
            )]);
        }

        let pairs = if params.cases {
            case_variants(source, target)
        } else {
            vec![(source.to_string(), target.to_string())]
        };

        Ok(pairs
            .into_iter()
            .map(|(from, to)| Self::new(filter.clone(), Transform::Literal { from, to }))
            .collect())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.transform {
            Transform::Literal { from, to } => write!(f, "{from} -> {to}"),
            Transform::Regex {
                pattern,
                replacement,
            } => write!(f, "r/{} -> {replacement}", pattern.as_str()),
        }
    }
}

/// Parsed `?`-parameters of a rule specification
#[derive(Debug, Default)]
struct RuleParams {
    extensions: Option<Vec<String>>,
    cases: bool,
}

impl RuleParams {
    fn parse(spec: &str, raw: &str) -> Result<Self, RuleError> {
        let mut params = Self::default();
        for entry in raw.split('&') {
            if entry == "cases" {
                params.cases = true;
            } else if let Some(exts) = entry.strip_prefix("ext=") {
                params.extensions = Some(exts.split(',').map(ToString::to_string).collect());
            } else {
                return Err(RuleError::UnsupportedParameter {
                    spec: spec.to_string(),
                    param: entry.to_string(),
                });
            }
        }
        Ok(params)
    }
}

/// Expand a literal pair into its case variants: the original form first,
/// then snake, kebab, camel, Pascal and SHOUTY_SNAKE, duplicates removed.
fn case_variants(from: &str, to: &str) -> Vec<(String, String)> {
    let mut variants = vec![
        (from.to_string(), to.to_string()),
        (from.to_snake_case(), to.to_snake_case()),
        (from.to_kebab_case(), to.to_kebab_case()),
        (from.to_lower_camel_case(), to.to_lower_camel_case()),
        (from.to_upper_camel_case(), to.to_upper_camel_case()),
        (from.to_shouty_snake_case(), to.to_shouty_snake_case()),
    ];
    let mut seen = Vec::new();
    variants.retain(|(f, _)| {
        if seen.contains(f) {
            false
        } else {
            seen.push(f.clone());
            true
        }
    });
    variants
}

/// An immutable, ordered sequence of replacement rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a list of rule specifications in order.
    ///
    /// # Errors
    /// Returns `RuleError` for the first malformed specification.
    pub fn parse(specs: &[String]) -> Result<Self, RuleError> {
        let mut rules = Vec::new();
        for spec in specs {
            rules.extend(Rule::parse(spec)?);
        }
        Ok(Self::new(rules))
    }

    /// Run the full pipeline over `text`, feeding each rule's output into
    /// the next. `filename` is the bare name used for filter decisions; an
    /// empty string is the path-rewrite key.
    #[must_use]
    pub fn apply(&self, filename: &str, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(filename, &acc))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<String> = self.rules.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", rules.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset(specs: &[&str]) -> RuleSet {
        let specs: Vec<String> = specs.iter().map(ToString::to_string).collect();
        RuleSet::parse(&specs).unwrap()
    }

    #[test]
    fn literal_replaces_all_occurrences() {
        let rules = ruleset(&["com.old=com.new"]);
        assert_eq!(
            rules.apply("Foo.java", "import com.old.a; import com.old.b;"),
            "import com.new.a; import com.new.b;"
        );
    }

    #[test]
    fn rules_chain_in_declaration_order() {
        let rules = ruleset(&["foo=bar", "bar.old=bar.new"]);
        assert_eq!(rules.apply("x.txt", "foo.old"), "bar.new");
        // Reversed order must not chain
        let reversed = ruleset(&["bar.old=bar.new", "foo=bar"]);
        assert_eq!(reversed.apply("x.txt", "foo.old"), "bar.old");
    }

    #[test]
    fn regex_rule_substitutes_capture_groups() {
        let rules = ruleset(&["r/v(\\d+)\\.(\\d+)=release-$1-$2"]);
        assert_eq!(rules.apply("x.txt", "v1.42"), "release-1-42");
    }

    #[test]
    fn extension_filter_limits_applicability() {
        let rules = ruleset(&["old=new?ext=java,ts"]);
        assert_eq!(rules.apply("Foo.java", "old name"), "new name");
        assert_eq!(rules.apply("app.ts", "old name"), "new name");
        assert_eq!(rules.apply("notes.md", "old name"), "old name");
    }

    #[test]
    fn extension_filter_never_fires_for_empty_filename() {
        // The empty filename is the path-rewrite key; filtered rules stay out
        let rules = ruleset(&["old=new?ext=java"]);
        assert_eq!(rules.apply("", "old/path"), "old/path");
    }

    #[test]
    fn hidden_files_have_no_extension() {
        let filter = RuleFilter::Extensions(vec!["gitignore".to_string()]);
        assert!(!filter.applies(".gitignore"));
        assert!(filter.applies("a.gitignore"));
    }

    #[test]
    fn unfiltered_rule_fires_for_empty_filename() {
        let rules = ruleset(&["old-module=new-module"]);
        assert_eq!(rules.apply("", "old-module/a.txt"), "new-module/a.txt");
    }

    #[test]
    fn missing_separator_is_an_error() {
        assert!(matches!(
            Rule::parse("no-separator"),
            Err(RuleError::MissingSeparator(_))
        ));
    }

    #[test]
    fn empty_source_is_an_error() {
        assert!(matches!(
            Rule::parse("=target"),
            Err(RuleError::EmptySource(_))
        ));
    }

    #[test]
    fn unknown_parameter_is_an_error() {
        assert!(matches!(
            Rule::parse("a=b?exts=java"),
            Err(RuleError::UnsupportedParameter { .. })
        ));
    }

    #[test]
    fn invalid_regex_is_an_error() {
        assert!(matches!(
            Rule::parse("r/[unclosed=x"),
            Err(RuleError::RegexCompile { .. })
        ));
    }

    #[test]
    fn cases_expands_literal_rule() {
        let rules = Rule::parse("old-module=new-module?cases").unwrap();
        let displayed: Vec<String> = rules.iter().map(ToString::to_string).collect();
        assert_eq!(
            displayed,
            vec![
                "old-module -> new-module",
                "old_module -> new_module",
                "oldModule -> newModule",
                "OldModule -> NewModule",
                "OLD_MODULE -> NEW_MODULE",
            ]
        );
    }

    #[test]
    fn cases_rejects_regex_source() {
        assert!(matches!(
            Rule::parse("r/a+=b?cases"),
            Err(RuleError::CasesWithRegex(_))
        ));
    }

    #[test]
    fn cases_with_extension_filter() {
        let specs = vec!["old-module=new-module?ext=rs&cases".to_string()];
        let rules = RuleSet::parse(&specs).unwrap();
        assert_eq!(rules.apply("lib.rs", "use old_module::x;"), "use new_module::x;");
        assert_eq!(rules.apply("notes.md", "use old_module::x;"), "use old_module::x;");
    }
}
