//! In-memory repository implementation.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notebox_core::notes::Note;
use notebox_core::storage::{NoteRepository, RepositoryError, Result};

type NoteKey = (String, String);

/// In-memory storage backend.
///
/// The existence check and the insert run under one write lock, which gives
/// the same create-if-absent guarantee as a conditional write. Listing
/// returns notes ordered by `note_id`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    notes: Arc<RwLock<BTreeMap<NoteKey, Note>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes across all owners.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn create_note(&self, note: &Note) -> Result<()> {
        let mut notes = self.notes.write().await;
        match notes.entry((note.owner_id.clone(), note.note_id.clone())) {
            Entry::Occupied(_) => Err(RepositoryError::AlreadyExists {
                entity_type: "Note",
                id: format!("{}/{}", note.owner_id, note.note_id),
            }),
            Entry::Vacant(slot) => {
                slot.insert(note.clone());
                Ok(())
            }
        }
    }

    async fn get_notes_by_owner(&self, owner_id: &str) -> Result<Vec<Note>> {
        let notes = self.notes.read().await;
        Ok(notes
            .range((owner_id.to_string(), String::new())..)
            .take_while(|((owner, _), _)| owner == owner_id)
            .map(|(_, note)| note.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = InMemoryRepository::new();
        repo.create_note(&Note::new("u1", "n1", "hello"))
            .await
            .unwrap();

        let notes = repo.get_notes_by_owner("u1").await.unwrap();

        assert_eq!(notes, vec![Note::new("u1", "n1", "hello")]);
    }

    #[tokio::test]
    async fn test_duplicate_create_is_rejected_and_keeps_original() {
        let repo = InMemoryRepository::new();
        repo.create_note(&Note::new("u1", "n1", "first"))
            .await
            .unwrap();

        let result = repo.create_note(&Note::new("u1", "n1", "second")).await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Note",
                id: "u1/n1".to_string()
            })
        );
        assert_eq!(
            repo.get_notes_by_owner("u1").await.unwrap(),
            vec![Note::new("u1", "n1", "first")]
        );
    }

    #[tokio::test]
    async fn test_same_note_id_under_different_owners() {
        let repo = InMemoryRepository::new();
        repo.create_note(&Note::new("u1", "n1", "a")).await.unwrap();
        repo.create_note(&Note::new("u2", "n1", "b")).await.unwrap();

        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_unknown_owner_lists_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_notes_by_owner("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_is_scoped_to_exact_owner() {
        let repo = InMemoryRepository::new();
        repo.create_note(&Note::new("u1", "n1", "mine"))
            .await
            .unwrap();
        repo.create_note(&Note::new("u10", "n1", "not mine"))
            .await
            .unwrap();
        repo.create_note(&Note::new("u", "n1", "not mine either"))
            .await
            .unwrap();

        let notes = repo.get_notes_by_owner("u1").await.unwrap();

        assert_eq!(notes, vec![Note::new("u1", "n1", "mine")]);
    }

    #[tokio::test]
    async fn test_listing_is_ordered_by_note_id() {
        let repo = InMemoryRepository::new();
        for id in ["c", "a", "b"] {
            repo.create_note(&Note::new("u1", id, "x")).await.unwrap();
        }

        let ids: Vec<String> = repo
            .get_notes_by_owner("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.note_id)
            .collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_have_exactly_one_winner() {
        let repo = InMemoryRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create_note(&Note::new("u1", "n1", format!("writer {i}")))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => created += 1,
                Err(RepositoryError::AlreadyExists { .. }) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(repo.len().await, 1);
    }
}
