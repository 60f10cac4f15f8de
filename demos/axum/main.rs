mod markdown;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use markdown::middleware::markdown_middleware;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = markdown::build_state().expect("valid negotiation configuration");

    let app = Router::new()
        .route("/", get(routes::home))
        .route("/index.md", get(routes::home_markdown))
        .route("/posts/{slug}", get(routes::post))
        .route("/posts/{slug}/index.md", get(routes::post_markdown))
        .route("/about", get(routes::about))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            markdown_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    tracing::info!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
