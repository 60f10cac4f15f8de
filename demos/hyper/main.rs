mod markdown;
mod routes;

use std::error::Error;
use std::net::SocketAddr;

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = markdown::build_state().expect("valid negotiation configuration");

    let addr: SocketAddr = "127.0.0.1:5003".parse().unwrap();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Hyper example running on http://{addr}");

    loop {
        let (stream, _) = listener.accept().await?;
        let state = state.clone();
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            let service = markdown::middleware::MarkdownNegotiation::new(
                state.negotiator.clone(),
                state.matcher.clone(),
                routes::router(state),
            );

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::error!("connection error: {err}");
            }
        });
    }
}
