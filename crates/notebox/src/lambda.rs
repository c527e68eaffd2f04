//! API Gateway HTTP API (payload format 2.0) adapter.
//!
//! Decodes the gateway event into a [`NoteRequest`] and encodes the
//! [`NoteResponse`] in the shape the gateway expects. The runtime loop
//! itself lives in the `notebox-lambda` binary.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use notebox_core::envelope::{NoteRequest, NoteResponse};
use notebox_core::identity::Claims;
use notebox_core::storage::NoteRepository;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::dispatch::dispatch;

/// The parts of an HTTP API event the notes operations consume.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpApiEvent {
    #[serde(default)]
    pub route_key: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    pub request_context: HttpApiRequestContext,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpApiRequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
    pub http: HttpApiDescription,
    #[serde(default)]
    pub authorizer: Option<HttpApiAuthorizer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpApiDescription {
    pub method: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpApiAuthorizer {
    #[serde(default)]
    pub jwt: Option<JwtAuthorizer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtAuthorizer {
    #[serde(default)]
    pub claims: BTreeMap<String, Value>,
}

impl HttpApiEvent {
    /// Convert into a [`NoteRequest`].
    ///
    /// `fallback_request_id` (the invocation id) is used when the gateway
    /// did not supply a request id.
    pub fn into_note_request(self, fallback_request_id: &str) -> NoteRequest {
        let claims = self
            .request_context
            .authorizer
            .and_then(|authorizer| authorizer.jwt)
            .map(|jwt| Claims::from_map(jwt.claims))
            .unwrap_or_default();

        let request_id = self
            .request_context
            .request_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| fallback_request_id.to_string());

        let body = match self.body {
            Some(body) if self.is_base64_encoded => decode_base64_body(&body),
            body => body,
        };

        let mut request = NoteRequest::new(self.request_context.http.method.as_str(), request_id)
            .with_claims(claims);
        request.route_key = self.route_key;
        request.body = body;
        request
    }
}

/// Undecodable bodies are treated as absent.
fn decode_base64_body(body: &str) -> Option<String> {
    let bytes = STANDARD.decode(body).ok()?;
    String::from_utf8(bytes).ok()
}

/// Encode a response for the gateway. The body is a JSON string.
pub fn encode_response(response: &NoteResponse) -> Value {
    json!({
        "statusCode": response.status_code,
        "headers": response.headers,
        "body": response.body.to_string(),
        "isBase64Encoded": false,
    })
}

/// Handle one raw invocation payload.
///
/// Never fails: an event that cannot be decoded is answered with a `500`.
pub async fn handle_event(
    notes: &dyn NoteRepository,
    payload: Value,
    invocation_id: &str,
) -> Value {
    let event: HttpApiEvent = match serde_json::from_value(payload) {
        Ok(event) => event,
        Err(error) => {
            tracing::error!(
                request_id = %invocation_id,
                error = %error,
                "Failed to decode HTTP API event"
            );
            return encode_response(&NoteResponse::internal_error());
        }
    };

    let request = event.into_note_request(invocation_id);
    encode_response(&dispatch(notes, request).await)
}
