mod error;
mod types;
mod validation;

pub use error::ValidationError;
pub use types::{NewNote, Note, MAX_CONTENT_CHARS, MAX_NOTE_ID_CHARS};
pub use validation::validate_create_note;
