//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! notes. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use notebox_core::notes::Note;
use notebox_core::storage::RepositoryError;

/// Partition key attribute.
pub const OWNER_ATTR: &str = "userId";
/// Sort key attribute.
pub const NOTE_ID_ATTR: &str = "noteId";
pub const CONTENT_ATTR: &str = "content";

/// Convert a Note to DynamoDB item.
pub fn note_to_item(note: &Note) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        OWNER_ATTR.to_string(),
        AttributeValue::S(note.owner_id.clone()),
    );
    item.insert(
        NOTE_ID_ATTR.to_string(),
        AttributeValue::S(note.note_id.clone()),
    );

    // Data
    item.insert(
        CONTENT_ATTR.to_string(),
        AttributeValue::S(note.content.clone()),
    );

    item
}

/// Convert a DynamoDB item to Note.
pub fn item_to_note(item: &HashMap<String, AttributeValue>) -> Result<Note, RepositoryError> {
    Ok(Note {
        owner_id: get_string(item, OWNER_ATTR)?,
        note_id: get_string(item, NOTE_ID_ATTR)?,
        content: get_string(item, CONTENT_ATTR)?,
    })
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
