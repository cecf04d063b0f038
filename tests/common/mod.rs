//! Shared utilities for integration testing.
//!
//! Provides a raw-TCP mock upstream (so response headers arrive exactly as
//! written, byte for byte) and a minimal pass-through proxy host carrying
//! the clacks layer.

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use clacks_plugin::ClacksLayer;

/// Install a test subscriber once; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clacks_plugin=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Start a mock upstream that answers every connection with a fixed raw
/// HTTP/1.1 response. Returns the bound address.
pub async fn start_mock_upstream(raw_response: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let raw = raw_response.clone();
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;
                        let _ = socket.write_all(raw.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// State injected into the pass-through handler.
#[derive(Clone)]
struct ProxyState {
    client: Client<HttpConnector, Body>,
    upstream: SocketAddr,
}

/// Forward the request to the upstream and relay its response untouched.
async fn forward(State(state): State<ProxyState>, req: Request<Body>) -> Response {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or("/");
    let uri: Uri = format!("http://{}{}", state.upstream, path_and_query)
        .parse()
        .unwrap();

    let (mut parts, body) = req.into_parts();
    parts.uri = uri;

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let (mut parts, body) = response.into_parts();
            // Hop-by-hop header, not forwarded.
            parts.headers.remove(header::CONNECTION);
            Response::from_parts(parts, Body::new(body))
        }
        Err(_) => (StatusCode::BAD_GATEWAY, "upstream request failed").into_response(),
    }
}

/// Start a pass-through proxy with the clacks layer registered.
/// Returns the bound address.
pub async fn start_proxy(upstream: SocketAddr) -> SocketAddr {
    init_tracing();
    let layer = ClacksLayer::register().expect("plugin registration");
    let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
    let state = ProxyState { client, upstream };

    let app = Router::new()
        .route("/", any(forward))
        .route("/{*path}", any(forward))
        .with_state(state)
        .layer(layer);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// HTTP client configured for direct loopback requests.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
