use crate::case::equals_ignore_case;
use regex_automata::meta::{BuildError, Regex};
use std::sync::Arc;
use thiserror::Error;

/// Callback deciding whether an origin is allowed, consulted per request.
pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

const MAX_PATTERN_LENGTH: usize = 50_000;

// Origin values beyond this are never matched; a serialized origin this
// long is not something a browser produces.
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// The set of origins a policy accepts.
///
/// An exact `*` entry supplied anywhere collapses the committed set to
/// [`AllowedOrigins::Any`]; see [`CorsPolicy::new`](crate::CorsPolicy::new).
#[derive(Clone, Default)]
pub enum AllowedOrigins {
    /// Wildcard: every origin is allowed.
    #[default]
    Any,
    /// Explicit matchers, evaluated in configuration order.
    List(Vec<OriginMatcher>),
    /// Dynamic validation callback.
    Predicate(Arc<OriginPredicateFn>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn allows(&self, origin: &str) -> bool {
        if origin.len() > MAX_ORIGIN_LENGTH {
            return false;
        }

        match self {
            Self::Any => true,
            Self::List(matchers) => matchers.iter().any(|matcher| matcher.matches(origin)),
            Self::Predicate(predicate) => predicate(origin),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether the allow-origin response value depends on the request
    /// origin, which is what forces `Vary: Origin`. A wildcard or a single
    /// exact entry always yields the same value; anything else varies.
    pub(crate) fn varies_by_origin(&self) -> bool {
        match self {
            Self::Any => false,
            Self::List(matchers) => {
                matchers.len() > 1
                    || matchers
                        .iter()
                        .any(|matcher| matches!(matcher, OriginMatcher::Pattern(_)))
            }
            Self::Predicate(_) => true,
        }
    }
}

/// One entry of an explicit origin list.
#[derive(Clone)]
pub enum OriginMatcher {
    /// Case-insensitive exact origin string.
    Exact(String),
    /// Case-insensitive pattern over the serialized origin.
    Pattern(Regex),
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        Regex::new(&format!("(?i:{pattern})"))
            .map(Self::Pattern)
            .map_err(|err| PatternError::Build(Box::new(err)))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(value) => equals_ignore_case(value, candidate),
            Self::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }

    pub(crate) fn is_wildcard(&self) -> bool {
        matches!(self, Self::Exact(value) if value == "*")
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_owned())
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
