use crate::headers::Headers;
use thiserror::Error;

/// Headers for an accepted simple request. The host applies them and then
/// invokes the wrapped handler.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Headers and status for a successfully handled preflight. The host
/// terminates the exchange itself; the wrapped handler is never invoked.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Outcome of evaluating one request against the policy.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// No `Origin` header: not a CORS request. Forward untouched.
    NotApplicable,
    Simple(SimpleResult),
    Preflight(PreflightResult),
    /// Terminal protocol rejection; respond with [`Rejection::status`] and
    /// no CORS headers.
    Rejected(Rejection),
}

/// Protocol-level rejection of a CORS request. Never retried: the client
/// decides whether to try again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("origin {origin:?} is not allowed")]
    OriginNotAllowed { origin: String },
    #[error("preflight request is missing the Access-Control-Request-Method header")]
    MissingRequestMethod,
    #[error("requested method {method:?} is not allowed")]
    MethodNotAllowed { method: String },
    #[error("requested header {header:?} is not allowed")]
    HeaderNotAllowed { header: String },
}

impl Rejection {
    /// HTTP status expressing this rejection on the wire.
    pub fn status(&self) -> u16 {
        match self {
            Self::OriginNotAllowed { .. } | Self::MissingRequestMethod => 400,
            Self::HeaderNotAllowed { .. } => 403,
            Self::MethodNotAllowed { .. } => 405,
        }
    }
}
