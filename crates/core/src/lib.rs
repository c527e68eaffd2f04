//! Functional core for notebox.
//!
//! Pure types and functions with no I/O: identity extraction, input
//! validation, the request/response envelope, the audit event catalogue and
//! the storage contract. The `notebox` crate provides the imperative shell.

pub mod audit;
pub mod envelope;
pub mod identity;
pub mod notes;
pub mod storage;
