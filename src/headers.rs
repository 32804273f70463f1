use crate::constants::header;
use indexmap::IndexMap;

/// Response headers computed for one request, in insertion order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, name: &str, value: impl Into<String>) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value.into());
        } else {
            self.headers.insert(name.to_owned(), value.into());
        }
    }

    /// Merge a value into `Vary`, deduplicating case-insensitively.
    pub(crate) fn add_vary(&mut self, value: impl Into<String>) {
        let incoming = value.into();
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_owned())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        for part in incoming.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if !entries.iter().any(|entry| entry.eq_ignore_ascii_case(part)) {
                entries.push(part.to_owned());
            }
        }

        if !entries.is_empty() {
            self.headers
                .insert(header::VARY.to_owned(), entries.join(", "));
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
