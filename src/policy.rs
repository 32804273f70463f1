use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::case::{canonical_header_name, equals_ignore_case};
use crate::constants::MAX_AGE_CEILING_SECS;
use crate::options::CorsOptions;
use crate::origin::{AllowedOrigins, OriginMatcher};

const DEFAULT_OPTIONS_SUCCESS_STATUS: u16 = 200;

/// Immutable access policy committed from [`CorsOptions`]. Built once at
/// setup time and shared read-only across all concurrent requests.
#[derive(Clone)]
pub struct CorsPolicy {
    origins: AllowedOrigins,
    methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    exposed_headers: Vec<String>,
    max_age: Option<i64>,
    ignore_options: bool,
    credentials: bool,
    options_success_status: u16,
}

impl CorsPolicy {
    /// Commit raw options into a normalized policy. Normalization is
    /// lenient and silent: duplicates collapse, a wildcard origin entry
    /// supersedes any explicit ones, and the max age is clamped to the
    /// protocol ceiling.
    pub fn new(options: CorsOptions) -> Self {
        Self {
            origins: Self::commit_origins(options.origins),
            methods: AllowedMethods::list(&options.methods),
            allowed_headers: AllowedHeaders::list(&options.allowed_headers),
            exposed_headers: Self::commit_exposed_headers(&options.exposed_headers),
            max_age: Self::commit_max_age(options.max_age),
            ignore_options: options.ignore_options,
            credentials: options.credentials,
            options_success_status: if options.options_success_status == 0 {
                DEFAULT_OPTIONS_SUCCESS_STATUS
            } else {
                options.options_success_status
            },
        }
    }

    fn commit_origins(origins: AllowedOrigins) -> AllowedOrigins {
        let matchers = match origins {
            AllowedOrigins::List(matchers) => matchers,
            other => return other,
        };

        // Wildcard always wins over explicit entries.
        if matchers.iter().any(OriginMatcher::is_wildcard) {
            return AllowedOrigins::Any;
        }

        let mut committed: Vec<OriginMatcher> = Vec::with_capacity(matchers.len());
        for matcher in matchers {
            if let OriginMatcher::Exact(ref value) = matcher
                && committed.iter().any(|existing| {
                    matches!(existing, OriginMatcher::Exact(seen) if equals_ignore_case(seen, value))
                })
            {
                continue;
            }
            committed.push(matcher);
        }

        AllowedOrigins::List(committed)
    }

    fn commit_exposed_headers(names: &[String]) -> Vec<String> {
        let mut committed: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let canonical = canonical_header_name(name);
            if !committed.contains(&canonical) {
                committed.push(canonical);
            }
        }
        committed
    }

    fn commit_max_age(max_age: Option<i64>) -> Option<i64> {
        match max_age {
            Some(secs) if secs > 0 => Some(secs.min(MAX_AGE_CEILING_SECS)),
            _ => None,
        }
    }

    pub fn origins(&self) -> &AllowedOrigins {
        &self.origins
    }

    pub fn methods(&self) -> &AllowedMethods {
        &self.methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &[String] {
        &self.exposed_headers
    }

    pub fn max_age(&self) -> Option<i64> {
        self.max_age
    }

    pub fn ignore_options(&self) -> bool {
        self.ignore_options
    }

    pub fn credentials(&self) -> bool {
        self.credentials
    }

    pub fn options_success_status(&self) -> u16 {
        self.options_success_status
    }

    /// `Vary: Origin` is required whenever the allow-origin value depends
    /// on the request origin.
    pub(crate) fn varies_by_origin(&self) -> bool {
        self.origins.varies_by_origin()
    }

    /// The `Access-Control-Allow-Origin` value for an accepted request:
    /// `*` for a credential-less wildcard policy, the literal request
    /// origin otherwise. Wildcard and credentials never combine in a
    /// single response.
    pub(crate) fn allow_origin_value<'a>(&self, request_origin: &'a str) -> &'a str {
        if self.origins.is_any() && !self.credentials {
            "*"
        } else {
            request_origin
        }
    }
}

impl From<CorsOptions> for CorsPolicy {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
