use crate::envelope::NoteRequest;
use crate::notes::ValidationError;

/// How loud an audit event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// The fixed set of audit event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditKind {
    Unauthorized,
    Authenticated,
    BadJson,
    MissingFields,
    InvalidType,
    InvalidNoteId,
    InvalidContent,
    NoteCreated,
    NoteConflict,
    StoreError,
    NotesListed,
    MethodNotAllowed,
}

impl AuditKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "request.unauthorized",
            Self::Authenticated => "request.authenticated",
            Self::BadJson => "request.bad_json",
            Self::MissingFields => "request.missing_fields",
            Self::InvalidType => "request.invalid_type",
            Self::InvalidNoteId => "request.invalid_note_id",
            Self::InvalidContent => "request.invalid_content",
            Self::NoteCreated => "notes.created",
            Self::NoteConflict => "notes.conflict",
            Self::StoreError => "notes.ddb_error",
            Self::NotesListed => "notes.listed",
            Self::MethodNotAllowed => "request.method_not_allowed",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Authenticated | Self::NoteCreated | Self::NotesListed => Severity::Info,
            Self::StoreError => Severity::Error,
            _ => Severity::Warn,
        }
    }
}

impl From<&ValidationError> for AuditKind {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::InvalidBody => Self::BadJson,
            ValidationError::MissingFields => Self::MissingFields,
            ValidationError::InvalidFieldType { .. } => Self::InvalidType,
            ValidationError::EmptyNoteId | ValidationError::NoteIdTooLong { .. } => {
                Self::InvalidNoteId
            }
            ValidationError::EmptyContent | ValidationError::ContentTooLarge { .. } => {
                Self::InvalidContent
            }
        }
    }
}

impl std::fmt::Display for AuditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One structured audit record. The emitter adds the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub kind: AuditKind,
    pub request_id: String,
    pub route_key: Option<String>,
    pub owner_id: Option<String>,
    /// Legacy partition a list was served from, when it differs from `owner_id`.
    pub fallback_owner_id: Option<String>,
    pub note_id: Option<String>,
    pub item_count: Option<usize>,
    pub error_code: Option<String>,
    pub reason: Option<String>,
}

impl AuditEvent {
    pub fn new(kind: AuditKind, request_id: impl Into<String>) -> Self {
        Self {
            kind,
            request_id: request_id.into(),
            route_key: None,
            owner_id: None,
            fallback_owner_id: None,
            note_id: None,
            item_count: None,
            error_code: None,
            reason: None,
        }
    }

    /// Event carrying the request's correlation id and route.
    pub fn for_request(kind: AuditKind, request: &NoteRequest) -> Self {
        Self {
            route_key: request.route_key.clone(),
            ..Self::new(kind, request.request_id.clone())
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn with_fallback_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.fallback_owner_id = Some(owner_id.into());
        self
    }

    pub fn with_note_id(mut self, note_id: impl Into<String>) -> Self {
        self.note_id = Some(note_id.into());
        self
    }

    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}
