//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `notebox_core::storage`.
//! Only a failed `PutItem` condition is told apart; every other failure
//! becomes `Unavailable` with the service error code.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use notebox_core::storage::RepositoryError;

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    match err {
        SdkError::ServiceError(service) => match service.into_err() {
            PutItemError::ConditionalCheckFailedException(_) => RepositoryError::AlreadyExists {
                entity_type: "Note",
                id: id.into(),
            },
            err => map_service_error(&err, "PutItem"),
        },
        err => map_transport_error(&err),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    match err {
        SdkError::ServiceError(service) => map_service_error(service.err(), "Query"),
        err => map_transport_error(&err),
    }
}

fn map_service_error<E: ProvideErrorMetadata + Debug>(err: &E, operation: &str) -> RepositoryError {
    RepositoryError::Unavailable {
        code: err.code().unwrap_or("Unknown").to_string(),
        message: err
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{operation} failed: {err:?}")),
    }
}

/// Failures that never reached the service: timeouts, dispatch and
/// construction errors.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> RepositoryError
where
    E: std::error::Error + 'static,
    R: Debug,
{
    let code = match err {
        SdkError::TimeoutError(_) => "Timeout",
        SdkError::DispatchFailure(_) => "DispatchFailure",
        SdkError::ConstructionFailure(_) => "ConstructionFailure",
        SdkError::ResponseError(_) => "ResponseError",
        _ => "Unknown",
    };

    RepositoryError::Unavailable {
        code: code.to_string(),
        message: DisplayErrorContext(err).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{ConditionalCheckFailedException, InternalServerError};

    #[test]
    fn test_conditional_check_failure_is_already_exists() {
        let err: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder().build(),
            ),
            (),
        );

        assert_eq!(
            map_put_item_error(err, "u1/n1"),
            RepositoryError::AlreadyExists {
                entity_type: "Note",
                id: "u1/n1".to_string()
            }
        );
    }

    #[test]
    fn test_other_put_item_failures_are_unavailable() {
        let err: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::InternalServerError(
                InternalServerError::builder().message("boom").build(),
            ),
            (),
        );

        assert!(matches!(
            map_put_item_error(err, "u1/n1"),
            RepositoryError::Unavailable { .. }
        ));
    }

    #[test]
    fn test_timeout_is_unavailable_with_timeout_code() {
        let err: SdkError<QueryError, ()> = SdkError::timeout_error("deadline elapsed");

        let mapped = map_query_error(err);

        assert_eq!(mapped.code(), "Timeout");
    }
}
