//! In-memory storage backend.
//!
//! Stores notes in a `BTreeMap` keyed by `(owner_id, note_id)` behind an
//! `Arc<RwLock<_>>`. Data is not persisted and is lost when the repository
//! is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use notebox::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
