use thiserror::Error;

use crate::headers::Headers;

/// Instruction to answer with a redirect to the Markdown resource.
#[derive(Debug, Clone)]
pub struct RedirectAction {
    /// Fully resolved target URL for the `Location` header.
    pub location: String,
    /// Redirect status code, 302 unless configured otherwise.
    pub status: u16,
    /// Response headers to attach alongside the redirect.
    pub headers: Headers,
}

/// Instruction to fetch the Markdown resource server-side and substitute its
/// response without the client observing a redirect.
#[derive(Debug, Clone)]
pub struct RewriteAction {
    /// Fully resolved URL of the Markdown resource to serve.
    pub target: String,
    /// Response headers to fold into the substituted response.
    pub headers: Headers,
}

/// Overall decision returned by the negotiation engine.
#[derive(Debug, Clone)]
pub enum MarkdownDecision {
    Redirect(RedirectAction),
    Rewrite(RewriteAction),
    /// No Markdown preference; the caller continues normal routing.
    NotApplicable,
}

/// Errors that can be produced while evaluating a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    #[error("request url is not a valid absolute url: {0}")]
    InvalidRequestUrl(#[from] url::ParseError),
}
