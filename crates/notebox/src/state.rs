//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The repository is built once at startup and shared by
//! every request; it carries no per-request state.

use std::sync::Arc;

use notebox_core::storage::NoteRepository;

use crate::config::Config;
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources
/// including the repository trait object for database access.
#[derive(Clone)]
pub struct AppState {
    /// Note repository.
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn with_repository(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }
}

// ============================================================================
// Factory functions for different backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage");
            Ok(Self::default())
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;
            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}
