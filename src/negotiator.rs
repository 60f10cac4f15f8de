use crate::constants::media_type;
use crate::context::RequestContext;
use crate::headers::vary_accept;
use crate::options::{NegotiationOptions, ValidationError};
use crate::result::{MarkdownDecision, NegotiationError, RedirectAction, RewriteAction};
use crate::strategy::DeliveryStrategy;
use crate::target::markdown_url;

/// Core negotiation engine that evaluates requests using [`NegotiationOptions`].
pub struct MarkdownNegotiator {
    options: NegotiationOptions,
}

impl MarkdownNegotiator {
    pub fn new(options: NegotiationOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Evaluate one request and decide how its Markdown alternative should be
    /// delivered, if at all.
    ///
    /// A request qualifies when its `Accept` value contains `text/markdown`
    /// anywhere in the raw header; an absent header never qualifies. The
    /// request URL is parsed only after the preference matched, so a
    /// malformed URL on an ordinary request still falls through to
    /// [`MarkdownDecision::NotApplicable`].
    ///
    /// The path transformation is not idempotent: a path that already names a
    /// Markdown file is treated like any other (`/posts/a/index.md` maps to
    /// `/posts/a/index.md/index.md`). Hosts that serve raw Markdown scope
    /// such paths out with a [`RouteMatcher`](crate::RouteMatcher).
    pub fn check(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<MarkdownDecision, NegotiationError> {
        let accept = request.accept.unwrap_or_default();
        if !accept.contains(media_type::TEXT_MARKDOWN) {
            return Ok(MarkdownDecision::NotApplicable);
        }

        let target = markdown_url(request.url, &self.options.index_file)?;
        let headers = vary_accept();

        match self.options.strategy {
            DeliveryStrategy::Redirect => Ok(MarkdownDecision::Redirect(RedirectAction {
                location: target,
                status: self.options.redirect_status,
                headers,
            })),
            DeliveryStrategy::Rewrite => Ok(MarkdownDecision::Rewrite(RewriteAction {
                target,
                headers,
            })),
        }
    }
}

#[cfg(test)]
#[path = "negotiator_test.rs"]
mod negotiator_test;
