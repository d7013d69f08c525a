//! Shared harness: a dispatch server on an ephemeral port.

use std::sync::Arc;

use commstyles::rpc::{self, MethodRegistry};

/// Bind to port 0 and return the base URL.
pub async fn start_server(registry: MethodRegistry) -> String {
    let app = rpc::router(Arc::new(registry));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// The demo method set behind a fresh server.
pub async fn start_demo() -> String {
    start_server(rpc::demo_registry("127.0.0.1:9001")).await
}
