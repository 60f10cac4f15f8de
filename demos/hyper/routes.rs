use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::CONTENT_TYPE;
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::markdown::SharedAppState;
use crate::markdown::middleware::DemoBody;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[derive(Clone)]
pub struct Router {
    state: SharedAppState,
}

pub fn router(state: SharedAppState) -> Router {
    Router { state }
}

impl Service<Request<Incoming>> for Router {
    type Response = Response<DemoBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let state = self.state.clone();

        Box::pin(async move {
            let response = match (req.method(), req.uri().path()) {
                (&Method::GET, "/") => home(&state),
                (&Method::GET, "/index.md") => home_markdown(&state),
                (&Method::GET, "/about") => about(),
                (&Method::GET, path) if path.starts_with("/posts/") && path.ends_with("/index.md") => {
                    post_markdown(path)
                }
                (&Method::GET, path) if path.starts_with("/posts/") => post(path),
                _ => not_found(),
            };

            Ok(response)
        })
    }
}

fn home(state: &SharedAppState) -> Response<DemoBody> {
    html_response(format!(
        "<h1>{}</h1><p>Request this page with <code>Accept: text/markdown</code> and the \
         middleware silently rewrites it to <code>/index.md</code>.</p>",
        state.site_name
    ))
}

fn home_markdown(state: &SharedAppState) -> Response<DemoBody> {
    markdown_response(format!(
        "# {}\n\nServed because your Accept header asked for `text/markdown`.\n",
        state.site_name
    ))
}

fn post(path: &str) -> Response<DemoBody> {
    let slug = path.strip_prefix("/posts/").unwrap_or("post");
    html_response(format!(
        "<h1>{slug}</h1><p>HTML rendition of this post.</p>"
    ))
}

fn post_markdown(path: &str) -> Response<DemoBody> {
    let slug = path
        .strip_prefix("/posts/")
        .and_then(|rest| rest.strip_suffix("/index.md"))
        .unwrap_or("post");
    markdown_response(format!("# {slug}\n\nMarkdown rendition of this post.\n"))
}

fn about() -> Response<DemoBody> {
    html_response(
        "<h1>About</h1><p>This route sits outside the matcher rule, so it never negotiates.</p>"
            .to_string(),
    )
}

fn not_found() -> Response<DemoBody> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::from("Not Found")))
        .expect("valid response")
}

fn html_response(body: String) -> Response<DemoBody> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .expect("valid response")
}

fn markdown_response(body: String) -> Response<DemoBody> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/markdown; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .expect("valid response")
}
