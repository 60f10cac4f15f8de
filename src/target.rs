use url::Url;

use crate::result::NegotiationError;

/// Derive the Markdown-equivalent path for a request path.
///
/// The root path maps straight to the index file; every other path has at
/// most one trailing slash stripped before the index file is appended, so
/// `/posts/foo` and `/posts/foo/` both land on `/posts/foo/index.md`.
pub(crate) fn markdown_path(path: &str, index_file: &str) -> String {
    if path == "/" {
        return format!("/{index_file}");
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    format!("{trimmed}/{index_file}")
}

/// Clone the request URL with only the path component replaced.
///
/// Scheme, authority, and query string ride along untouched; a query such as
/// `?page=2` stays on the Markdown target.
pub(crate) fn markdown_url(request_url: &str, index_file: &str) -> Result<String, NegotiationError> {
    let mut url = Url::parse(request_url)?;
    let path = markdown_path(url.path(), index_file);
    url.set_path(&path);
    Ok(url.into())
}

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;
