pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod case;
mod context;
mod cors;
mod headers;
mod options;
mod origin;
mod policy;
mod result;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use options::CorsOptions;
pub use origin::{AllowedOrigins, OriginMatcher, OriginPredicateFn, PatternError};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, PreflightResult, Rejection, SimpleResult};
