use std::sync::Arc;

use bunner_markdown_rs::{
    DeliveryStrategy, MarkdownNegotiator, NegotiationOptions, PathPattern, RouteMatcher,
    ValidationError,
};

pub type SharedNegotiator = Arc<MarkdownNegotiator>;

#[derive(Clone)]
pub struct AppState {
    pub negotiator: SharedNegotiator,
    pub matcher: RouteMatcher,
    pub site_name: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = NegotiationOptions {
        strategy: DeliveryStrategy::Redirect,
        redirect_status: 302,
        index_file: "index.md".to_string(),
    };

    let negotiator = Arc::new(MarkdownNegotiator::new(options)?);
    let matcher = RouteMatcher::new([PathPattern::exact("/"), PathPattern::tree("/posts")]);

    Ok(AppState {
        negotiator,
        matcher,
        site_name: "Axum Markdown negotiation example",
    })
}

pub mod middleware;
