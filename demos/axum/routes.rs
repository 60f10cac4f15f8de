use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
};

use crate::markdown::AppState;

pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Request this page with <code>Accept: text/markdown</code> to get \
         redirected to <code>/index.md</code>.</p>",
        state.site_name
    ))
}

pub async fn home_markdown(State(state): State<AppState>) -> impl IntoResponse {
    markdown_body(format!(
        "# {}\n\nServed because your Accept header asked for `text/markdown`.\n",
        state.site_name
    ))
}

pub async fn post(Path(slug): Path<String>) -> impl IntoResponse {
    Html(format!(
        "<h1>{slug}</h1><p>HTML rendition of this post.</p>"
    ))
}

pub async fn post_markdown(Path(slug): Path<String>) -> impl IntoResponse {
    markdown_body(format!("# {slug}\n\nMarkdown rendition of this post.\n"))
}

pub async fn about() -> impl IntoResponse {
    Html("<h1>About</h1><p>This route sits outside the matcher rule, so it never negotiates.</p>")
}

fn markdown_body(body: String) -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/markdown; charset=utf-8")], body)
}
