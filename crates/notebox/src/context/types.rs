//! Pure types for request-scoped context.

use notebox_core::identity::Claims;
use uuid::Uuid;

/// Opaque correlation identifier, used for tracing and audit events.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context available to all handlers.
///
/// Complements `AppState` (application-scoped) with request-specific data.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request identifier for tracing.
    pub request_id: RequestId,
    /// Route descriptor, `<METHOD> <path>`.
    pub route_key: String,
    /// Claims asserted by the upstream authorizer.
    pub claims: Claims,
}
