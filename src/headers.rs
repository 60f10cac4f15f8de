use indexmap::IndexMap;

use crate::constants::header;

/// Response headers attached to a decision, in insertion order.
pub type Headers = IndexMap<String, String>;

/// Headers every redirect or rewrite decision carries: `Vary: Accept`, so
/// shared caches never hand the Markdown variant to a client that asked for
/// the default representation.
pub(crate) fn vary_accept() -> Headers {
    let mut headers = Headers::with_capacity(1);
    headers.insert(header::VARY.to_string(), header::ACCEPT.to_string());
    headers
}

/// Fold `addition` into an existing comma-separated `Vary` value.
///
/// Entries are trimmed, empty members dropped, and duplicates removed
/// case-insensitively while the first spelling wins. Hosts use this when a
/// rewrite substitutes a downstream response that may already carry `Vary`.
pub fn merge_vary(existing: Option<&str>, addition: &str) -> String {
    let mut entries: Vec<&str> = Vec::new();

    for entry in existing
        .unwrap_or_default()
        .split(',')
        .chain(std::iter::once(addition))
    {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if entries
            .iter()
            .any(|seen| seen.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        entries.push(entry);
    }

    entries.join(", ")
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
