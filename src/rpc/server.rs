//! HTTP transport for the dispatch registry.
//!
//! One endpoint: `POST /rpc`. Every dispatched call answers 200 with a
//! result-or-fault envelope; only a request whose envelope cannot be parsed
//! gets a bare 400.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use super::envelope::CallRequest;
use super::registry::MethodRegistry;

/// Build the dispatch router over the given registry.
pub fn router(registry: Arc<MethodRegistry>) -> Router {
    Router::new()
        .route("/rpc", post(call_handler))
        .with_state(registry)
}

/// Serve the dispatch endpoint at the given address (e.g. `"127.0.0.1:9001"`).
pub async fn serve(registry: Arc<MethodRegistry>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(registry);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dispatch server listening");
    axum::serve(listener, app).await
}

async fn call_handler(State(registry): State<Arc<MethodRegistry>>, body: Bytes) -> Response {
    let request: CallRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(%err, "unparseable call envelope");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    Json(registry.dispatch(&request)).into_response()
}
