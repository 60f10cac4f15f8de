pub mod constants;

mod context;
mod headers;
mod matcher;
mod negotiator;
mod options;
mod result;
mod strategy;
mod target;

pub use context::RequestContext;
pub use headers::{Headers, merge_vary};
pub use matcher::{PathPattern, PathPredicateFn, PatternError, RouteMatcher};
pub use negotiator::MarkdownNegotiator;
pub use options::{NegotiationOptions, ValidationError};
pub use result::{MarkdownDecision, NegotiationError, RedirectAction, RewriteAction};
pub use strategy::DeliveryStrategy;
