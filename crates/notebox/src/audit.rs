//! Audit event emission.
//!
//! Writes each [`AuditEvent`] as a single `tracing` event on the `audit`
//! target. Absent fields are simply not recorded.

use notebox_core::audit::{AuditEvent, Severity};
use tracing::Level;

macro_rules! emit_at {
    ($level:expr, $event:expr) => {
        tracing::event!(
            target: "audit",
            $level,
            event = $event.name(),
            request_id = %$event.request_id,
            route_key = $event.route_key.as_deref(),
            owner_id = $event.owner_id.as_deref(),
            fallback_owner_id = $event.fallback_owner_id.as_deref(),
            note_id = $event.note_id.as_deref(),
            item_count = $event.item_count,
            error_code = $event.error_code.as_deref(),
            reason = $event.reason.as_deref(),
            "{}",
            $event.name()
        )
    };
}

/// Emit one audit event at the severity its kind prescribes.
pub fn emit(event: &AuditEvent) {
    match event.kind.severity() {
        Severity::Info => emit_at!(Level::INFO, event),
        Severity::Warn => emit_at!(Level::WARN, event),
        Severity::Error => emit_at!(Level::ERROR, event),
    }
}
