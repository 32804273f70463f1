use crate::origin::AllowedOrigins;

/// Raw configuration for the engine, assembled as a composite literal over
/// [`CorsOptions::default`]. Conflicting or redundant entries are never an
/// error; [`CorsPolicy::new`](crate::CorsPolicy::new) normalizes them
/// silently.
#[derive(Clone, Default)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    /// Allowed methods beyond the safelisted GET, HEAD and POST.
    pub methods: Vec<String>,
    /// Allowed request headers beyond the safelisted Accept,
    /// Accept-Language and Content-Language.
    pub allowed_headers: Vec<String>,
    /// Response headers the calling page may read.
    pub exposed_headers: Vec<String>,
    /// Preflight cache duration in seconds. Values above 600 are clamped;
    /// values at or below zero suppress the header.
    pub max_age: Option<i64>,
    /// Never intercept OPTIONS; always forward it to the wrapped handler.
    pub ignore_options: bool,
    pub credentials: bool,
    /// Status for a successfully handled preflight. Zero means the default
    /// of 200.
    pub options_success_status: u16,
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
