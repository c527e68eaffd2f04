use async_trait::async_trait;

use crate::notes::Note;

use super::Result;

/// Storage contract for notes.
///
/// Implementations must be safe to share between concurrent requests and
/// must not hold per-request state.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Writes the note only if `(owner_id, note_id)` does not exist yet.
    ///
    /// Returns [`RepositoryError::AlreadyExists`](super::RepositoryError::AlreadyExists)
    /// when the key is taken. The existing record is left untouched. When
    /// several callers race on the same key exactly one of them succeeds.
    async fn create_note(&self, note: &Note) -> Result<()>;

    /// Returns every note in the owner's partition.
    ///
    /// An owner without notes yields an empty vector, not an error.
    async fn get_notes_by_owner(&self, owner_id: &str) -> Result<Vec<Note>>;
}
