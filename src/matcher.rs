use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub type PathPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    Timeout { elapsed: Duration, budget: Duration },
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile path pattern"),
            PatternError::Timeout { .. } => {
                write!(f, "compiling path pattern exceeded the configured budget")
            }
            PatternError::TooLong { length, max } => write!(
                f,
                "path pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 10_000;
const MAX_PATH_LENGTH: usize = 8_192;

/// One path rule inside a [`RouteMatcher`].
#[derive(Clone)]
pub enum PathPattern {
    /// Byte-exact path match.
    Exact(String),
    /// A prefix plus every nested segment: `tree("/posts")` covers `/posts`,
    /// `/posts/` and `/posts/a/b`, but never `/postscript`.
    Tree(String),
    /// Regex over the full path. Unanchored unless the pattern anchors itself.
    Pattern(Regex),
    /// Host-supplied callback.
    Predicate(Arc<PathPredicateFn>),
    /// Every path.
    Any,
}

impl PathPattern {
    pub fn exact<S: Into<String>>(path: S) -> Self {
        Self::Exact(path.into())
    }

    /// Build a tree pattern; a trailing slash on the prefix is ignored.
    pub fn tree<S: Into<String>>(prefix: S) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.strip_suffix('/').unwrap_or(&prefix);
        Self::Tree(trimmed.to_string())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        // Paths are case-sensitive, so no casefold wrapper here.
        let started = Instant::now();
        let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(value) => value == path,
            PathPattern::Tree(prefix) => {
                path == prefix
                    || (path.starts_with(prefix.as_str())
                        && path.as_bytes().get(prefix.len()) == Some(&b'/'))
            }
            PathPattern::Pattern(regex) => regex.is_match(path.as_bytes()),
            PathPattern::Predicate(predicate) => predicate(path),
            PathPattern::Any => true,
        }
    }
}

impl From<String> for PathPattern {
    fn from(value: String) -> Self {
        PathPattern::Exact(value)
    }
}

impl From<&str> for PathPattern {
    fn from(value: &str) -> Self {
        PathPattern::Exact(value.to_owned())
    }
}

/// Declarative routing rule deciding which request paths the negotiation hook
/// applies to.
///
/// The matcher is handed to the hosting runtime at registration time and
/// consulted there, before the engine runs; [`MarkdownNegotiator::check`]
/// never looks at it.
///
/// [`MarkdownNegotiator::check`]: crate::MarkdownNegotiator::check
#[derive(Clone)]
pub struct RouteMatcher {
    patterns: Vec<PathPattern>,
}

impl RouteMatcher {
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathPattern>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        if path.len() > MAX_PATH_LENGTH {
            return false;
        }

        self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }
}

impl Default for RouteMatcher {
    /// The stock rule: the site root plus everything under `/posts`.
    fn default() -> Self {
        Self::new([PathPattern::exact("/"), PathPattern::tree("/posts")])
    }
}

impl From<PathPattern> for RouteMatcher {
    fn from(pattern: PathPattern) -> Self {
        Self::new([pattern])
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
