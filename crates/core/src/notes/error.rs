use thiserror::Error;

/// Reasons a create-note body is rejected.
///
/// The display text is the `message` returned to the client.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("noteId and content are required")]
    MissingFields,

    #[error("{field} must be a string")]
    InvalidFieldType { field: &'static str },

    #[error("noteId cannot be empty")]
    EmptyNoteId,

    #[error("noteId must be at most {max} characters")]
    NoteIdTooLong { max: usize },

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("content must be at most {max} characters")]
    ContentTooLarge { max: usize },
}
