//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `NoteRepository`
//! trait defined in `notebox_core::storage`, plus the owner lookup used by
//! the list operation.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local storage, for development and tests
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The flags only decide which backend `AppState::new` builds. The in-memory
//! repository is always compiled since tests rely on it.
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p notebox --no-default-features --features dynamodb
//! ```

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p notebox --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;
mod lookup;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
pub use lookup::{find_notes, OwnerNotes};
