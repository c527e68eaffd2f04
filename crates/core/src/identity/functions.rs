use super::{CallerIdentity, Claims, IdentityError};

/// Derives the caller identity from verified claims.
///
/// The subject claim wins; the email claim is used as the owner key only
/// when the subject is missing. Fails with [`IdentityError::Unauthorized`]
/// when neither is present.
///
/// # Examples
///
/// ```
/// use notebox_core::identity::{extract_identity, Claims};
///
/// let claims = Claims::new().with_subject("u1").with_email("u1@example.com");
/// let identity = extract_identity(&claims).unwrap();
/// assert_eq!(identity.owner_id, "u1");
/// ```
pub fn extract_identity(claims: &Claims) -> Result<CallerIdentity, IdentityError> {
    let owner_id = claims
        .subject
        .as_ref()
        .or(claims.email.as_ref())
        .cloned()
        .ok_or(IdentityError::Unauthorized)?;

    Ok(CallerIdentity {
        owner_id,
        email: claims.email.clone(),
    })
}
