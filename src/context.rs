#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    /// Absolute request URL, including path and any query string.
    pub url: &'a str,
    /// Raw `Accept` header value, or `None` when the request carries none.
    /// Case-insensitive header-name lookup is the hosting runtime's concern.
    pub accept: Option<&'a str>,
}
