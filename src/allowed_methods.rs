use crate::constants::SAFELISTED_METHODS;
use indexmap::IndexSet;

/// Committed set of allowed request methods. The safelisted methods (GET,
/// HEAD, POST) are always allowed and are not stored explicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedMethods {
    explicit: IndexSet<String>,
}

impl AllowedMethods {
    /// Normalize configured method tokens: trim, uppercase, drop empties,
    /// and deduplicate against both the explicit set and the safelist.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut explicit = IndexSet::new();
        for value in values {
            let token = value.as_ref().trim().to_ascii_uppercase();
            if token.is_empty() || SAFELISTED_METHODS.contains(token.as_str()) {
                continue;
            }
            explicit.insert(token);
        }

        Self { explicit }
    }

    /// Whether `method` may be requested in a preflight. Expects the
    /// trimmed, uppercased token.
    pub fn allows(&self, method: &str) -> bool {
        Self::is_safelisted(method) || self.explicit.contains(method)
    }

    pub fn is_safelisted(method: &str) -> bool {
        SAFELISTED_METHODS.contains(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.explicit.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
