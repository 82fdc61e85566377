//! Health server for hosting-platform port detection and liveness probes.
//!
//! Responses are static: they do not depend on the news file or on the
//! state of the Discord connection.

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const HEALTHZ_PATH: &str = "/healthz";

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route(HEALTHZ_PATH, get(healthz))
}

async fn index() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

async fn healthz() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Serves the health routes on `listener` until the process exits.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}
