use indexmap::IndexSet;
use once_cell::sync::Lazy;

pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Methods browsers send cross-origin without pre-authorization. They never
/// need to appear in `Access-Control-Allow-Methods`.
pub static SAFELISTED_METHODS: Lazy<IndexSet<&'static str>> =
    Lazy::new(|| IndexSet::from([method::GET, method::HEAD, method::POST]));

/// Request headers that are always implicitly permitted, stored in canonical
/// case. They never need to appear in `Access-Control-Allow-Headers`.
pub static SAFELISTED_HEADERS: Lazy<IndexSet<&'static str>> =
    Lazy::new(|| IndexSet::from(["Accept", "Accept-Language", "Content-Language"]));

/// Protocol ceiling for `Access-Control-Max-Age`, in seconds (10 minutes).
pub const MAX_AGE_CEILING_SECS: i64 = 600;
