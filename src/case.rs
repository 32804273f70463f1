pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Canonical HTTP header case: the first letter and every letter following a
/// hyphen are uppercased, the rest lowercased (`content-TYPE` becomes
/// `Content-Type`). Names that are not valid HTTP tokens are returned
/// verbatim, matching `textproto.CanonicalMIMEHeaderKey`.
pub(crate) fn canonical_header_name(name: &str) -> String {
    if !is_http_token(name) {
        return name.to_owned();
    }

    let mut canonical = String::with_capacity(name.len());
    let mut at_word_start = true;
    for byte in name.bytes() {
        let mapped = if at_word_start {
            byte.to_ascii_uppercase()
        } else {
            byte.to_ascii_lowercase()
        };
        canonical.push(mapped as char);
        at_word_start = byte == b'-';
    }
    canonical
}

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;
