use serde_json::{Map, Value};

use super::{NewNote, ValidationError, MAX_CONTENT_CHARS, MAX_NOTE_ID_CHARS};

const NOTE_ID_FIELD: &str = "noteId";
const CONTENT_FIELD: &str = "content";

/// Validates and normalizes a create-note request body.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the body is a JSON object
/// 2. `noteId` and `content` are both present (`null` counts as absent)
/// 3. both are strings, `noteId` checked first
/// 4. trimmed `noteId` is not empty
/// 5. trimmed `noteId` has at most [`MAX_NOTE_ID_CHARS`] characters
/// 6. trimmed `content` is not empty
/// 7. `content` has at most [`MAX_CONTENT_CHARS`] characters
///
/// The returned `note_id` is trimmed; `content` is returned unchanged.
/// Unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use notebox_core::notes::{validate_create_note, ValidationError};
///
/// let note = validate_create_note(Some(r#"{"noteId":" n1 ","content":"hello"}"#)).unwrap();
/// assert_eq!(note.note_id, "n1");
///
/// assert_eq!(
///     validate_create_note(Some(r#"{"content":"hello"}"#)),
///     Err(ValidationError::MissingFields)
/// );
/// ```
pub fn validate_create_note(body: Option<&str>) -> Result<NewNote, ValidationError> {
    let body = body.ok_or(ValidationError::InvalidBody)?;
    let fields = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => return Err(ValidationError::InvalidBody),
    };

    let (Some(note_id), Some(content)) = (
        present(&fields, NOTE_ID_FIELD),
        present(&fields, CONTENT_FIELD),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    let note_id = note_id.as_str().ok_or(ValidationError::InvalidFieldType {
        field: NOTE_ID_FIELD,
    })?;
    let content = content.as_str().ok_or(ValidationError::InvalidFieldType {
        field: CONTENT_FIELD,
    })?;

    let note_id = note_id.trim();
    if note_id.is_empty() {
        return Err(ValidationError::EmptyNoteId);
    }
    if note_id.chars().count() > MAX_NOTE_ID_CHARS {
        return Err(ValidationError::NoteIdTooLong {
            max: MAX_NOTE_ID_CHARS,
        });
    }

    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLarge {
            max: MAX_CONTENT_CHARS,
        });
    }

    Ok(NewNote {
        note_id: note_id.to_string(),
        content: content.to_string(),
    })
}

fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(value: Value) -> Result<NewNote, ValidationError> {
        validate_create_note(Some(&value.to_string()))
    }

    // ==================== Body shape ====================

    #[test]
    fn test_missing_body_is_invalid() {
        assert_eq!(validate_create_note(None), Err(ValidationError::InvalidBody));
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        assert_eq!(
            validate_create_note(Some("{not json")),
            Err(ValidationError::InvalidBody)
        );
        assert_eq!(
            validate_create_note(Some("")),
            Err(ValidationError::InvalidBody)
        );
    }

    #[test]
    fn test_non_object_json_is_invalid() {
        assert_eq!(validate(json!(["n1", "hello"])), Err(ValidationError::InvalidBody));
        assert_eq!(validate(json!("n1")), Err(ValidationError::InvalidBody));
    }

    // ==================== Presence ====================

    #[test]
    fn test_missing_note_id_wins_over_malformed_content() {
        assert_eq!(
            validate(json!({"content": 5})),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_missing_content_is_reported() {
        assert_eq!(
            validate(json!({"noteId": "n1"})),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_null_fields_count_as_missing() {
        assert_eq!(
            validate(json!({"noteId": null, "content": "hello"})),
            Err(ValidationError::MissingFields)
        );
    }

    // ==================== Types ====================

    #[test]
    fn test_non_string_note_id_names_note_id() {
        assert_eq!(
            validate(json!({"noteId": 7, "content": 8})),
            Err(ValidationError::InvalidFieldType { field: "noteId" })
        );
    }

    #[test]
    fn test_non_string_content_names_content() {
        assert_eq!(
            validate(json!({"noteId": "n1", "content": {"text": "hi"}})),
            Err(ValidationError::InvalidFieldType { field: "content" })
        );
    }

    // ==================== noteId ====================

    #[test]
    fn test_empty_note_id_is_rejected() {
        assert_eq!(
            validate(json!({"noteId": "", "content": "x"})),
            Err(ValidationError::EmptyNoteId)
        );
    }

    #[test]
    fn test_whitespace_note_id_is_rejected_before_length() {
        let padded = " ".repeat(500);
        assert_eq!(
            validate(json!({"noteId": padded, "content": "x"})),
            Err(ValidationError::EmptyNoteId)
        );
    }

    #[test]
    fn test_note_id_of_exactly_max_length_is_accepted() {
        let note_id = "a".repeat(MAX_NOTE_ID_CHARS);
        let note = validate(json!({"noteId": note_id, "content": "x"})).unwrap();
        assert_eq!(note.note_id.chars().count(), MAX_NOTE_ID_CHARS);
    }

    #[test]
    fn test_note_id_length_is_measured_after_trimming() {
        let note_id = format!("  {}  ", "a".repeat(MAX_NOTE_ID_CHARS));
        let note = validate(json!({"noteId": note_id, "content": "x"})).unwrap();
        assert_eq!(note.note_id, "a".repeat(MAX_NOTE_ID_CHARS));
    }

    #[test]
    fn test_note_id_over_max_length_is_rejected() {
        let note_id = "a".repeat(MAX_NOTE_ID_CHARS + 1);
        assert_eq!(
            validate(json!({"noteId": note_id, "content": "x"})),
            Err(ValidationError::NoteIdTooLong { max: 128 })
        );
    }

    #[test]
    fn test_note_id_length_counts_characters_not_bytes() {
        let note_id = "é".repeat(MAX_NOTE_ID_CHARS);
        assert!(validate(json!({"noteId": note_id, "content": "x"})).is_ok());
    }

    // ==================== content ====================

    #[test]
    fn test_whitespace_content_is_rejected() {
        assert_eq!(
            validate(json!({"noteId": "n1", "content": " \n\t "})),
            Err(ValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_content_of_exactly_max_length_is_accepted() {
        let content = "c".repeat(MAX_CONTENT_CHARS);
        assert!(validate(json!({"noteId": "n1", "content": content})).is_ok());
    }

    #[test]
    fn test_content_over_max_length_is_rejected() {
        let content = "c".repeat(MAX_CONTENT_CHARS + 1);
        assert_eq!(
            validate(json!({"noteId": "n1", "content": content})),
            Err(ValidationError::ContentTooLarge { max: 4000 })
        );
    }

    #[test]
    fn test_content_length_includes_surrounding_whitespace() {
        let content = format!(" {} ", "c".repeat(MAX_CONTENT_CHARS - 1));
        assert_eq!(
            validate(json!({"noteId": "n1", "content": content})),
            Err(ValidationError::ContentTooLarge { max: 4000 })
        );
    }

    // ==================== Normalization ====================

    #[test]
    fn test_note_id_is_trimmed_and_content_kept_verbatim() {
        let note = validate(json!({"noteId": "  n1 ", "content": "  hello  "})).unwrap();

        assert_eq!(note.note_id, "n1");
        assert_eq!(note.content, "  hello  ");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let note = validate(json!({
            "noteId": "n1",
            "content": "hello",
            "userId": "someone-else"
        }))
        .unwrap();

        assert_eq!(
            note,
            NewNote {
                note_id: "n1".to_string(),
                content: "hello".to_string()
            }
        );
    }
}
