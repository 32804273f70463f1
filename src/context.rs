/// Borrowed view of the parts of an inbound request the engine inspects.
/// `None` and an empty string are both treated as an absent header.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
