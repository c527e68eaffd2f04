mod error;
mod functions;
mod types;

pub use error::IdentityError;
pub use functions::extract_identity;
pub use types::{CallerIdentity, Claims, EMAIL_CLAIM, SUBJECT_CLAIM};
