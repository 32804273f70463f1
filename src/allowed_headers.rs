use crate::case::canonical_header_name;
use crate::constants::SAFELISTED_HEADERS;
use indexmap::IndexSet;

/// Committed set of allowed request headers, stored in canonical case. The
/// safelisted headers (Accept, Accept-Language, Content-Language) are always
/// allowed and are not stored explicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedHeaders {
    explicit: IndexSet<String>,
}

impl AllowedHeaders {
    /// Normalize configured header names: trim, canonicalize, drop empties,
    /// and deduplicate against both the explicit set and the safelist.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut explicit = IndexSet::new();
        for value in values {
            let name = value.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let canonical = canonical_header_name(name);
            if SAFELISTED_HEADERS.contains(canonical.as_str()) {
                continue;
            }
            explicit.insert(canonical);
        }

        Self { explicit }
    }

    /// Whether `name` (already canonical) may be requested in a preflight.
    pub fn allows(&self, name: &str) -> bool {
        Self::is_safelisted(name) || self.explicit.contains(name)
    }

    pub fn is_safelisted(name: &str) -> bool {
        SAFELISTED_HEADERS.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.explicit.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
