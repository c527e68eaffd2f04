//! Audit event catalogue.
//!
//! Every decision point of the request dispatcher produces exactly one
//! [`AuditEvent`]. Emitting it is the shell's job.

mod types;

pub use types::{AuditEvent, AuditKind, Severity};
