//! Notes handler.
//!
//! Translates an HTTP request into a `NoteRequest`, runs it through the
//! dispatcher, and renders the `NoteResponse` back as JSON. Method checks
//! happen in the dispatcher, after identity extraction, so the route
//! accepts every method.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use notebox_core::envelope::{NoteRequest, NoteResponse, CONTENT_TYPE_JSON};

use crate::{context::RequestContext, dispatch::dispatch, state::AppState};

/// HTTP rendering of a [`NoteResponse`].
pub struct JsonResponse(pub NoteResponse);

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(self.0.body)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_JSON),
        );
        response
    }
}

/// ANY /notes
///
/// Bodies that are not UTF-8 or exceed the configured limit are passed on
/// as absent, which a `POST` reports as an invalid body.
pub async fn notes(
    State(state): State<AppState>,
    ctx: RequestContext,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> JsonResponse {
    let body = match body {
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => String::from_utf8(bytes.to_vec()).ok(),
        Err(rejection) => {
            tracing::debug!(
                request_id = %ctx.request_id,
                error = %rejection,
                "Request body rejected"
            );
            None
        }
    };

    let mut request = NoteRequest::new(method.as_str(), ctx.request_id.as_str())
        .with_claims(ctx.claims)
        .with_route_key(ctx.route_key);
    request.body = body;

    JsonResponse(dispatch(state.notes.as_ref(), request).await)
}
