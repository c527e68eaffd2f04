use serde::{Deserialize, Serialize};

/// Maximum length of a trimmed `noteId`, in characters.
pub const MAX_NOTE_ID_CHARS: usize = 128;

/// Maximum length of `content`, in characters.
pub const MAX_CONTENT_CHARS: usize = 4000;

/// A persisted note.
///
/// `(owner_id, note_id)` is unique. Notes are write-once: there is no update
/// or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Partition key, always derived from verified claims.
    #[serde(rename = "userId")]
    pub owner_id: String,
    /// Sort key within the owner's partition.
    #[serde(rename = "noteId")]
    pub note_id: String,
    pub content: String,
}

impl Note {
    pub fn new(
        owner_id: impl Into<String>,
        note_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            note_id: note_id.into(),
            content: content.into(),
        }
    }
}

/// A validated create-note payload, not yet bound to an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    /// Trimmed note id.
    pub note_id: String,
    /// Content as sent by the client.
    pub content: String,
}

impl NewNote {
    /// Bind the payload to the caller's partition.
    pub fn into_note(self, owner_id: impl Into<String>) -> Note {
        Note {
            owner_id: owner_id.into(),
            note_id: self.note_id,
            content: self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_note_serializes_with_wire_names() {
        let note = Note::new("u1", "n1", "hello");

        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            json!({"userId": "u1", "noteId": "n1", "content": "hello"})
        );
    }

    #[test]
    fn test_into_note_keeps_payload() {
        let new_note = NewNote {
            note_id: "n1".to_string(),
            content: "  hello ".to_string(),
        };

        let note = new_note.into_note("u1");

        assert_eq!(note, Note::new("u1", "n1", "  hello "));
    }
}
