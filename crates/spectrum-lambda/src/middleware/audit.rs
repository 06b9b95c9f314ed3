use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::owner::OWNER_HEADER;

/// Logs each request as an `api_request` event with its outcome and
/// latency. Only whether an owner was named is recorded, never the id.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let anonymous = !req.headers().contains_key(OWNER_HEADER);
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        anonymous,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
