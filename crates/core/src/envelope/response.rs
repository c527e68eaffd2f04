use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::notes::{Note, ValidationError};

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const MSG_CREATED: &str = "Note created";
pub const MSG_UNAUTHORIZED: &str = "Unauthorized";
pub const MSG_CONFLICT: &str = "noteId already exists";
pub const MSG_INTERNAL_ERROR: &str = "Internal server error";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// Structured response: status, JSON content type, JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl NoteResponse {
    pub fn json(status_code: u16, body: Value) -> Self {
        Self {
            status_code,
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                CONTENT_TYPE_JSON.to_string(),
            )]),
            body,
        }
    }

    /// Response whose body is `{"message": ...}`.
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self::json(status_code, json!({ "message": message.into() }))
    }

    pub fn created() -> Self {
        Self::message(200, MSG_CREATED)
    }

    pub fn items(notes: &[Note]) -> Self {
        Self::json(200, json!({ "items": notes }))
    }

    pub fn bad_request(error: &ValidationError) -> Self {
        Self::message(400, error.to_string())
    }

    pub fn unauthorized() -> Self {
        Self::message(401, MSG_UNAUTHORIZED)
    }

    pub fn method_not_allowed() -> Self {
        Self::message(405, MSG_METHOD_NOT_ALLOWED)
    }

    pub fn conflict() -> Self {
        Self::message(409, MSG_CONFLICT)
    }

    pub fn internal_error() -> Self {
        Self::message(500, MSG_INTERNAL_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let response = NoteResponse::conflict();

        assert_eq!(response.status_code, 409);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.body, json!({"message": "noteId already exists"}));
    }

    #[test]
    fn test_items_response_uses_wire_names() {
        let response = NoteResponse::items(&[Note::new("u1", "n1", "hello")]);

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            json!({"items": [{"userId": "u1", "noteId": "n1", "content": "hello"}]})
        );
    }

    #[test]
    fn test_empty_items_response() {
        assert_eq!(NoteResponse::items(&[]).body, json!({"items": []}));
    }

    #[test]
    fn test_bad_request_carries_reason() {
        let response = NoteResponse::bad_request(&ValidationError::EmptyNoteId);

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, json!({"message": "noteId cannot be empty"}));
    }

    #[test]
    fn test_serializes_with_camel_case_status() {
        let value = serde_json::to_value(NoteResponse::unauthorized()).unwrap();
        assert_eq!(value["statusCode"], 401);
        assert_eq!(value["body"]["message"], "Unauthorized");
    }
}
