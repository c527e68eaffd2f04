//! Request-scoped context module.
//!
//! Provides the `RequestContext` extractor that bundles the correlation id,
//! route descriptor and verified claims of an HTTP request.

mod extractor;
mod types;

pub use extractor::{EMAIL_HEADER, REQUEST_ID_HEADER, SUBJECT_HEADER};
pub use types::{RequestContext, RequestId};
