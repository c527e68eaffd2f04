//! Liveness probe for the HTTP server.

use axum::http::StatusCode;

/// GET /livez
///
/// Answers 200 as soon as the listener accepts connections. The note store
/// is never consulted, so a store outage does not restart the process.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
