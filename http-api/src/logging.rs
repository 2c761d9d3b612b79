//! Request logging middleware for the REST API
//!
//! Emits one structured log event per handled request with timing.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Request logging middleware
///
/// Logs every request with method, path, response status, and latency.
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let latency_ms = start_time.elapsed().as_millis();
    info!(
        %method,
        path,
        status = response.status().as_u16(),
        latency_ms,
        "request handled"
    );

    response
}
