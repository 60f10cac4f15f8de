use std::sync::Arc;

use bunner_markdown_rs::{
    DeliveryStrategy, MarkdownNegotiator, NegotiationOptions, PathPattern, RouteMatcher,
    ValidationError,
};

pub type SharedNegotiator = Arc<MarkdownNegotiator>;
pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub negotiator: SharedNegotiator,
    pub matcher: RouteMatcher,
    pub site_name: &'static str,
}

pub fn build_state() -> Result<SharedAppState, ValidationError> {
    let options = NegotiationOptions {
        strategy: DeliveryStrategy::Rewrite,
        redirect_status: 302,
        index_file: "index.md".to_string(),
    };

    let negotiator = Arc::new(MarkdownNegotiator::new(options)?);
    let matcher = RouteMatcher::new([PathPattern::exact("/"), PathPattern::tree("/posts")]);

    Ok(Arc::new(AppState {
        negotiator,
        matcher,
        site_name: "Hyper Markdown negotiation example",
    }))
}

pub mod middleware;
