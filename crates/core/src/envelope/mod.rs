//! Transport-neutral request/response envelope.
//!
//! The HTTP server and the Lambda runtime both translate their native
//! request into a [`NoteRequest`] and render the [`NoteResponse`] back.

mod request;
mod response;

pub use request::{NoteRequest, RequestMethod};
pub use response::{
    NoteResponse, CONTENT_TYPE_JSON, MSG_CONFLICT, MSG_CREATED, MSG_INTERNAL_ERROR,
    MSG_METHOD_NOT_ALLOWED, MSG_UNAUTHORIZED,
};
