//! Owner lookup with the legacy email fallback.
//!
//! Notes were once keyed by the caller's email. When the subject partition
//! is empty and the caller has a different email claim, that partition is
//! consulted as well. Writes never use the fallback key.

use notebox_core::identity::CallerIdentity;
use notebox_core::notes::Note;
use notebox_core::storage::{NoteRepository, Result};

/// Notes found for a caller and the partition they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerNotes {
    pub owner_id: String,
    pub notes: Vec<Note>,
    /// `true` when the notes come from the email partition.
    pub used_fallback: bool,
}

/// Lists the caller's notes, falling back to the email partition when the
/// primary partition is empty.
pub async fn find_notes(
    repo: &dyn NoteRepository,
    identity: &CallerIdentity,
) -> Result<OwnerNotes> {
    let notes = repo.get_notes_by_owner(&identity.owner_id).await?;
    tracing::debug!(
        owner_id = %identity.owner_id,
        count = notes.len(),
        lookup = "primary",
        "Queried notes by owner"
    );

    let fallback_owner = match identity.fallback_owner_id() {
        Some(email) if notes.is_empty() => email,
        _ => {
            return Ok(OwnerNotes {
                owner_id: identity.owner_id.clone(),
                notes,
                used_fallback: false,
            })
        }
    };

    let notes = repo.get_notes_by_owner(fallback_owner).await?;
    tracing::debug!(
        owner_id = %fallback_owner,
        count = notes.len(),
        lookup = "fallback",
        "Queried notes by owner"
    );

    Ok(OwnerNotes {
        owner_id: fallback_owner.to_string(),
        notes,
        used_fallback: true,
    })
}
