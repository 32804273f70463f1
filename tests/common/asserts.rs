use cors_gate::constants::header;
use cors_gate::{CorsDecision, Headers, Rejection};

use super::headers::header_value;

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {other:?}"),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {other:?}"),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> Rejection {
    match decision {
        CorsDecision::Rejected(rejection) => rejection,
        other => panic!("expected rejection, got {other:?}"),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected NotApplicable decision"
    );
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

pub fn assert_header_absent(headers: &Headers, name: &str) {
    assert_eq!(header_value(headers, name), None, "{name} should be absent");
}

pub fn assert_vary_eq(headers: &Headers, expected: &str) {
    assert_header_eq(headers, header::VARY, expected);
}

pub fn assert_vary_absent(headers: &Headers) {
    assert_header_absent(headers, header::VARY);
}
