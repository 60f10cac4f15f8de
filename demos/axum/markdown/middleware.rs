use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::HOST},
    middleware::Next,
    response::Response,
};
use bunner_markdown_rs::{
    Headers, MarkdownDecision, NegotiationError, RedirectAction, constants::header,
};

use super::AppState;

pub async fn markdown_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.matcher.matches(request.uri().path()) {
        return next.run(request).await;
    }

    let owned_ctx = OwnedRequestContext::from_request(&request);
    let context = owned_ctx.as_request_context();

    match state.negotiator.check(&context) {
        Ok(MarkdownDecision::Redirect(action)) => {
            tracing::info!(location = %action.location, "redirecting to markdown variant");
            redirect_response(action)
        }
        // A route layer runs after routing, so a server-side rewrite could not
        // re-route here; the rewrite strategy lives in the hyper example.
        Ok(MarkdownDecision::Rewrite(_)) => next.run(request).await,
        Ok(MarkdownDecision::NotApplicable) => next.run(request).await,
        Err(err) => middleware_error_response(err),
    }
}

fn redirect_response(action: RedirectAction) -> Response {
    let status = StatusCode::from_u16(action.status).unwrap_or(StatusCode::FOUND);
    let mut response = Response::builder()
        .status(status)
        .body(Body::empty())
        .unwrap();

    apply_headers(response.headers_mut(), &action.headers);
    if let (Ok(name), Ok(value)) = (
        HeaderName::try_from(header::LOCATION),
        HeaderValue::from_str(&action.location),
    ) {
        response.headers_mut().insert(name, value);
    }
    response
}

fn middleware_error_response(err: NegotiationError) -> Response {
    let mut response = Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .body(Body::empty())
        .unwrap();

    *response.body_mut() = Body::from(format!("Markdown negotiation error: {err}"));
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    url: String,
    accept: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
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
            accept: header_value(headers, header::ACCEPT),
        }
    }

    fn as_request_context(&self) -> bunner_markdown_rs::RequestContext<'_> {
        bunner_markdown_rs::RequestContext {
            url: &self.url,
            accept: self.accept.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
