use crate::identity::Claims;

/// Request method as far as the notes operations care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Other(String),
}

impl RequestMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Other(method) => method,
        }
    }
}

impl From<&str> for RequestMethod {
    fn from(method: &str) -> Self {
        match method {
            "GET" => Self::Get,
            "POST" => Self::Post,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An already-authenticated request.
#[derive(Debug, Clone)]
pub struct NoteRequest {
    pub method: RequestMethod,
    /// Raw body; JSON for `POST`.
    pub body: Option<String>,
    /// Claims verified by the upstream authorizer.
    pub claims: Claims,
    /// Correlation id threaded through audit events.
    pub request_id: String,
    /// Route descriptor, e.g. `POST /notes`.
    pub route_key: Option<String>,
}

impl NoteRequest {
    pub fn new(method: impl Into<RequestMethod>, request_id: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            body: None,
            claims: Claims::default(),
            request_id: request_id.into(),
            route_key: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_claims(mut self, claims: Claims) -> Self {
        self.claims = claims;
        self
    }

    pub fn with_route_key(mut self, route_key: impl Into<String>) -> Self {
        self.route_key = Some(route_key.into());
        self
    }
}
