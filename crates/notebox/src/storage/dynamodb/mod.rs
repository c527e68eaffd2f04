//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `NoteRepository`
//! using `aws-sdk-dynamodb`.
//!
//! Table layout: partition key `userId` (S), sort key `noteId` (S), plus a
//! `content` (S) attribute.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
