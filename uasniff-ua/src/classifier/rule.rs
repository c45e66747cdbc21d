use regex::bytes::{Regex, RegexBuilder};
use uasniff_utils::str::contains_any_token;

/// The input a [`Rule`] is evaluated against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject<'a> {
    /// User-Agent string, possibly empty.
    pub(crate) user_agent: &'a str,
    /// Application name as reported by the host, if any.
    pub(crate) app_name: Option<&'a str>,
}

/// A single matching rule of the classification table.
///
/// Composite rules encode their exclusions themselves,
/// a rule never depends on the outcome of another table entry.
#[derive(Debug)]
pub(crate) enum Rule {
    /// Any of the tokens occurs, ASCII case insensitive.
    Tokens(&'static [&'static str]),
    /// A regular expression matches, ASCII case insensitive.
    Pattern(Pattern),
    /// The host reported exactly this application name.
    AppName(&'static str),
    /// Any of the nested rules matches.
    Any(Vec<Rule>),
    /// The rule matches and the exclusion does not.
    Unless { rule: Box<Rule>, exclude: Box<Rule> },
}

impl Rule {
    pub(crate) fn tokens(tokens: &'static [&'static str]) -> Self {
        Self::Tokens(tokens)
    }

    pub(crate) fn pattern(source: &'static str) -> Self {
        Self::Pattern(Pattern::new(source))
    }

    pub(crate) fn app_name(name: &'static str) -> Self {
        Self::AppName(name)
    }

    pub(crate) fn any(rules: impl IntoIterator<Item = Self>) -> Self {
        Self::Any(rules.into_iter().collect())
    }

    #[must_use]
    pub(crate) fn unless(self, exclude: Self) -> Self {
        Self::Unless {
            rule: Box::new(self),
            exclude: Box::new(exclude),
        }
    }

    pub(crate) fn is_match(&self, subject: Subject<'_>) -> bool {
        match self {
            Self::Tokens(tokens) => contains_any_token(subject.user_agent, tokens.iter()),
            Self::Pattern(pattern) => pattern.is_match(subject.user_agent),
            Self::AppName(name) => subject.app_name == Some(*name),
            Self::Any(rules) => rules.iter().any(|rule| rule.is_match(subject)),
            Self::Unless { rule, exclude } => rule.is_match(subject) && !exclude.is_match(subject),
        }
    }

    /// Visit every pattern within this rule, nested ones included.
    #[cfg(test)]
    pub(crate) fn patterns(&self) -> Vec<&Pattern> {
        match self {
            Self::Pattern(pattern) => vec![pattern],
            Self::Tokens(_) | Self::AppName(_) => Vec::new(),
            Self::Any(rules) => rules.iter().flat_map(Self::patterns).collect(),
            Self::Unless { rule, exclude } => {
                let mut patterns = rule.patterns();
                patterns.extend(exclude.patterns());
                patterns
            }
        }
    }
}

/// A compiled regular expression, matched on the bytes of the User-Agent string.
///
/// Unicode mode is off: only ASCII letters fold case and `\w`, `\W`
/// and `\b` are ASCII classes, the same notion of case the token
/// rules use. Any non-ASCII byte is a non-word byte.
#[derive(Debug)]
pub(crate) struct Pattern {
    source: &'static str,
    regex: Option<Regex>,
}

impl Pattern {
    /// Compile the pattern.
    ///
    /// A pattern that fails to compile is logged and never matches.
    pub(crate) fn new(source: &'static str) -> Self {
        let regex = RegexBuilder::new(source)
            .unicode(false)
            .case_insensitive(true)
            .build()
            .inspect_err(|err| {
                tracing::error!(
                    "failed to compile ua pattern {source:?}: fallback to is_match=false; err = {err}"
                );
            })
            .ok();
        Self { source, regex }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &'static str {
        self.source
    }

    #[cfg(test)]
    pub(crate) fn is_compiled(&self) -> bool {
        self.regex.is_some()
    }

    fn is_match(&self, haystack: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(haystack.as_bytes()),
            None => {
                tracing::trace!("ua pattern {:?} is unavailable: is_match=false", self.source);
                false
            }
        }
    }
}
