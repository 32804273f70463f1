use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::case::canonical_header_name;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, PreflightResult, Rejection, SimpleResult};

/// The CORS engine: evaluates one request at a time against an immutable
/// [`CorsPolicy`] and reports what the host must do with the exchange.
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self {
            policy: CorsPolicy::new(options),
        }
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Evaluate one request. Writes nothing itself; every outcome is
    /// returned as data for the host to apply.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin.filter(|value| !value.is_empty()) else {
            return CorsDecision::NotApplicable;
        };

        if !self.policy.origins().allows(origin) {
            return CorsDecision::Rejected(Rejection::OriginNotAllowed {
                origin: origin.to_owned(),
            });
        }

        let is_options = request.method.eq_ignore_ascii_case(method::OPTIONS);
        if is_options && !self.policy.ignore_options() {
            self.check_preflight(request, origin)
        } else {
            self.check_simple(origin)
        }
    }

    fn check_preflight(&self, request: &RequestContext<'_>, origin: &str) -> CorsDecision {
        let requested_method = request
            .access_control_request_method
            .map(str::trim)
            .filter(|value| !value.is_empty());
        let Some(requested_method) = requested_method else {
            // OPTIONS with an Origin but no requested method is a
            // malformed preflight.
            return CorsDecision::Rejected(Rejection::MissingRequestMethod);
        };

        let requested_method = requested_method.to_ascii_uppercase();
        if !self.policy.methods().allows(&requested_method) {
            return CorsDecision::Rejected(Rejection::MethodNotAllowed {
                method: requested_method,
            });
        }

        let requested_headers =
            match self.collect_requested_headers(request.access_control_request_headers) {
                Ok(names) => names,
                Err(rejection) => return CorsDecision::Rejected(rejection),
            };

        let mut headers = HeaderCollection::new();
        if !AllowedMethods::is_safelisted(&requested_method) {
            headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, requested_method);
        }
        if !requested_headers.is_empty() {
            headers.set(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                requested_headers.join(","),
            );
        }
        if let Some(max_age) = self.policy.max_age() {
            headers.set(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }
        self.apply_common_headers(&mut headers, origin);

        CorsDecision::Preflight(PreflightResult {
            headers: headers.into_headers(),
            status: self.policy.options_success_status(),
        })
    }

    fn check_simple(&self, origin: &str) -> CorsDecision {
        let mut headers = HeaderCollection::new();
        if !self.policy.exposed_headers().is_empty() {
            headers.set(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                self.policy.exposed_headers().join(","),
            );
        }
        self.apply_common_headers(&mut headers, origin);

        CorsDecision::Simple(SimpleResult {
            headers: headers.into_headers(),
        })
    }

    /// Parse `Access-Control-Request-Headers` and vet every entry against
    /// the policy. Safelisted names are skipped; the first disallowed name
    /// aborts the whole preflight. Returns the canonical, non-safelisted
    /// names to echo back.
    fn collect_requested_headers(
        &self,
        requested: Option<&str>,
    ) -> Result<Vec<String>, Rejection> {
        let mut echoed: Vec<String> = Vec::new();
        for name in requested.unwrap_or_default().split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let canonical = canonical_header_name(name);
            if AllowedHeaders::is_safelisted(&canonical) {
                continue;
            }
            if !self.policy.allowed_headers().allows(&canonical) {
                return Err(Rejection::HeaderNotAllowed { header: canonical });
            }
            if !echoed.contains(&canonical) {
                echoed.push(canonical);
            }
        }
        Ok(echoed)
    }

    fn apply_common_headers(&self, headers: &mut HeaderCollection, origin: &str) {
        if self.policy.credentials() {
            headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        if self.policy.varies_by_origin() {
            headers.add_vary(header::ORIGIN);
        }
        headers.set(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.policy.allow_origin_value(origin),
        );
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
