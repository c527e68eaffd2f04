//! Request dispatcher.
//!
//! Every request runs through the same sequence:
//!
//! 1. identity extraction; without identity the request ends with `401`
//!    before any validation or store access
//! 2. dispatch on method: `POST` creates, `GET` lists, anything else is `405`
//! 3. `POST` validates the body (`400` with the specific reason) and performs
//!    a conditional write (`200`, `409`, or `500`)
//! 4. `GET` lists the caller's partition with the email fallback (`200`,
//!    or `500` when the store fails)
//!
//! Each terminal step emits exactly one audit event. Nothing is retained
//! between requests and nothing is retried.

use notebox_core::audit::{AuditEvent, AuditKind};
use notebox_core::envelope::{NoteRequest, NoteResponse, RequestMethod};
use notebox_core::identity::{extract_identity, CallerIdentity};
use notebox_core::notes::validate_create_note;
use notebox_core::storage::{NoteRepository, RepositoryError};

use crate::audit;
use crate::storage::find_notes;

/// Runs one request through identity, validation and storage.
pub async fn dispatch(notes: &dyn NoteRepository, request: NoteRequest) -> NoteResponse {
    let identity = match extract_identity(&request.claims) {
        Ok(identity) => identity,
        Err(_) => {
            audit::emit(&AuditEvent::for_request(AuditKind::Unauthorized, &request));
            return NoteResponse::unauthorized();
        }
    };

    audit::emit(
        &AuditEvent::for_request(AuditKind::Authenticated, &request)
            .with_owner(&identity.owner_id),
    );

    match &request.method {
        RequestMethod::Post => create_note(notes, &request, &identity).await,
        RequestMethod::Get => list_notes(notes, &request, &identity).await,
        RequestMethod::Other(method) => {
            audit::emit(
                &AuditEvent::for_request(AuditKind::MethodNotAllowed, &request)
                    .with_owner(&identity.owner_id)
                    .with_reason(method),
            );
            NoteResponse::method_not_allowed()
        }
    }
}

async fn create_note(
    notes: &dyn NoteRepository,
    request: &NoteRequest,
    identity: &CallerIdentity,
) -> NoteResponse {
    let new_note = match validate_create_note(request.body.as_deref()) {
        Ok(new_note) => new_note,
        Err(error) => {
            audit::emit(
                &AuditEvent::for_request(AuditKind::from(&error), request)
                    .with_owner(&identity.owner_id)
                    .with_reason(error.to_string()),
            );
            return NoteResponse::bad_request(&error);
        }
    };

    let note = new_note.into_note(identity.owner_id.clone());
    let event = |kind| {
        AuditEvent::for_request(kind, request)
            .with_owner(&note.owner_id)
            .with_note_id(&note.note_id)
    };

    match notes.create_note(&note).await {
        Ok(()) => {
            audit::emit(&event(AuditKind::NoteCreated));
            NoteResponse::created()
        }
        Err(RepositoryError::AlreadyExists { .. }) => {
            audit::emit(&event(AuditKind::NoteConflict));
            NoteResponse::conflict()
        }
        Err(error) => {
            audit::emit(
                &event(AuditKind::StoreError)
                    .with_error_code(error.code())
                    .with_reason(error.to_string()),
            );
            NoteResponse::internal_error()
        }
    }
}

async fn list_notes(
    notes: &dyn NoteRepository,
    request: &NoteRequest,
    identity: &CallerIdentity,
) -> NoteResponse {
    match find_notes(notes, identity).await {
        Ok(found) => {
            let mut event = AuditEvent::for_request(AuditKind::NotesListed, request)
                .with_owner(&identity.owner_id)
                .with_item_count(found.notes.len());
            if found.used_fallback {
                event = event.with_fallback_owner(&found.owner_id);
            }
            audit::emit(&event);
            NoteResponse::items(&found.notes)
        }
        Err(error) => {
            audit::emit(
                &AuditEvent::for_request(AuditKind::StoreError, request)
                    .with_owner(&identity.owner_id)
                    .with_error_code(error.code())
                    .with_reason(error.to_string()),
            );
            NoteResponse::internal_error()
        }
    }
}
