use std::future::Future;
use std::pin::Pin;

use bunner_markdown_rs::constants::header;
use bunner_markdown_rs::{
    Headers, MarkdownDecision, NegotiationError, RedirectAction, RequestContext, RouteMatcher,
    merge_vary,
};
use http_body_util::Full;
use hyper::Uri;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HOST, HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};
use url::{Position, Url};

use super::SharedNegotiator;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type DemoBody = Full<Bytes>;

/// Hyper middleware following the pattern described in the
/// official "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct MarkdownNegotiation<S> {
    inner: S,
    negotiator: SharedNegotiator,
    matcher: RouteMatcher,
}

impl<S> MarkdownNegotiation<S> {
    pub fn new(negotiator: SharedNegotiator, matcher: RouteMatcher, inner: S) -> Self {
        Self {
            inner,
            negotiator,
            matcher,
        }
    }
}

impl<S> Service<Request<Incoming>> for MarkdownNegotiation<S>
where
    S: Service<Request<Incoming>, Response = Response<DemoBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<DemoBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, mut req: Request<Incoming>) -> Self::Future {
        if !self.matcher.matches(req.uri().path()) {
            let inner = self.inner.clone();
            return Box::pin(async move { inner.call(req).await });
        }

        let owned_ctx = OwnedRequestContext::from_request(&req);
        let decision = self.negotiator.check(&owned_ctx.as_request_context());

        match decision {
            Ok(MarkdownDecision::Redirect(action)) => {
                Box::pin(async move { Ok(redirect_response(action)) })
            }
            Ok(MarkdownDecision::Rewrite(action)) => match rewritten_uri(&action.target) {
                Some(uri) => {
                    tracing::info!(uri = %action.target, "rewriting to markdown variant");
                    *req.uri_mut() = uri;
                    let inner = self.inner.clone();
                    Box::pin(async move {
                        let mut response = inner.call(req).await?;
                        merge_vary_header(response.headers_mut(), &action.headers);
                        Ok(response)
                    })
                }
                None => Box::pin(async move {
                    Ok(internal_error_message("rewrite target is not a valid URI"))
                }),
            },
            Ok(MarkdownDecision::NotApplicable) => {
                let inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
            Err(err) => Box::pin(async move { Ok(internal_error(err)) }),
        }
    }
}

fn redirect_response(action: RedirectAction) -> Response<DemoBody> {
    let status = StatusCode::from_u16(action.status).unwrap_or(StatusCode::FOUND);
    let mut builder = Response::builder().status(status);
    if let Some(map) = builder.headers_mut() {
        insert_headers(map, &action.headers);
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(header::LOCATION),
            HeaderValue::from_str(&action.location),
        ) {
            map.insert(name, value);
        }
    }
    builder
        .body(Full::new(Bytes::new()))
        .expect("failed to build redirect response")
}

/// Path and query of the rewrite target, ready to swap into the request URI.
fn rewritten_uri(target: &str) -> Option<Uri> {
    let url = Url::parse(target).ok()?;
    url[Position::BeforePath..].parse().ok()
}

fn internal_error(err: NegotiationError) -> Response<DemoBody> {
    internal_error_message(&format!("Markdown negotiation error: {err}"))
}

fn internal_error_message(message: &str) -> Response<DemoBody> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .body(Full::new(Bytes::from(message.to_string())))
        .expect("failed to build internal error response")
}

fn insert_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn merge_vary_header(map: &mut HeaderMap, headers: &Headers) {
    let Some(addition) = headers.get(header::VARY) else {
        return;
    };

    let existing = map
        .get(header::VARY)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let merged = merge_vary(existing.as_deref(), addition);
    if let (Ok(name), Ok(value)) = (
        HeaderName::try_from(header::VARY),
        HeaderValue::from_str(&merged),
    ) {
        map.insert(name, value);
    }
}

struct OwnedRequestContext {
    url: String,
    accept: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request<Incoming>) -> Self {
        let headers = request.headers();
        let host = headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("localhost");
        let path_and_query = request
            .uri()
            .path_and_query()
            .map(|value| value.as_str())
            .unwrap_or("/");

        Self {
            url: format!("http://{host}{path_and_query}"),
            accept: headers
                .get(header::ACCEPT)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string()),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            url: &self.url,
            accept: self.accept.as_deref(),
        }
    }
}
