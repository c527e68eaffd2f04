//! Axum extractor for RequestContext.
//!
//! Claims are read from headers injected by the authorizing proxy in front
//! of this service. The proxy must strip these headers from client requests.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use notebox_core::identity::Claims;

use super::types::{RequestContext, RequestId};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const SUBJECT_HEADER: &str = "x-auth-sub";
pub const EMAIL_HEADER: &str = "x-auth-email";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    header_str(headers, REQUEST_ID_HEADER)
        .map(RequestId::from_string)
        .unwrap_or_default()
}

fn extract_claims(headers: &HeaderMap) -> Claims {
    let mut claims = Claims::new();
    if let Some(subject) = header_str(headers, SUBJECT_HEADER) {
        claims = claims.with_subject(subject);
    }
    if let Some(email) = header_str(headers, EMAIL_HEADER) {
        claims = claims.with_email(email);
    }
    claims
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestContext {
            request_id: extract_request_id(&parts.headers),
            route_key: format!("{} {}", parts.method, parts.uri.path()),
            claims: extract_claims(&parts.headers),
        })
    }
}
