use std::collections::BTreeMap;

use serde_json::Value;

/// Claim carrying the provider's stable subject identifier.
pub const SUBJECT_CLAIM: &str = "sub";

/// Claim carrying the caller's email address.
pub const EMAIL_CLAIM: &str = "email";

/// Verified identity assertions handed over by the upstream authorizer.
///
/// Only `subject` and `email` take part in identity extraction. Any other
/// claim is kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    pub subject: Option<String>,
    pub email: Option<String>,
    pub extra: BTreeMap<String, Value>,
}

impl Claims {
    /// Create an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject claim. Empty values are treated as absent.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = non_empty(subject.into());
        self
    }

    /// Set the email claim. Empty values are treated as absent.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_empty(email.into());
        self
    }

    /// Build claims from a raw claim mapping.
    ///
    /// `sub` and `email` are recognized only when they hold non-empty
    /// strings; everything else lands in `extra`.
    pub fn from_map(map: BTreeMap<String, Value>) -> Self {
        let mut claims = Self::new();
        for (name, value) in map {
            match (name.as_str(), value) {
                (SUBJECT_CLAIM, Value::String(s)) => claims.subject = non_empty(s),
                (EMAIL_CLAIM, Value::String(s)) => claims.email = non_empty(s),
                (_, value) => {
                    claims.extra.insert(name, value);
                }
            }
        }
        claims
    }

    /// Returns `true` when neither recognized claim is present.
    pub fn is_anonymous(&self) -> bool {
        self.subject.is_none() && self.email.is_none()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The caller as seen by the notes operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Partition key every write and the first lookup use.
    pub owner_id: String,
    /// Email claim, kept for the legacy fallback lookup.
    pub email: Option<String>,
}

impl CallerIdentity {
    /// Secondary owner key for the fallback lookup.
    ///
    /// Only present when an email claim exists and differs from `owner_id`.
    pub fn fallback_owner_id(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| *email != self.owner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_map_picks_recognized_string_claims() {
        let map = BTreeMap::from([
            ("sub".to_string(), json!("u1")),
            ("email".to_string(), json!("u1@example.com")),
            ("cognito:groups".to_string(), json!(["admins"])),
        ]);

        let claims = Claims::from_map(map);

        assert_eq!(claims.subject.as_deref(), Some("u1"));
        assert_eq!(claims.email.as_deref(), Some("u1@example.com"));
        assert_eq!(claims.extra.get("cognito:groups"), Some(&json!(["admins"])));
    }

    #[test]
    fn test_from_map_treats_non_string_subject_as_extra() {
        let map = BTreeMap::from([("sub".to_string(), json!(42))]);

        let claims = Claims::from_map(map);

        assert!(claims.subject.is_none());
        assert_eq!(claims.extra.get("sub"), Some(&json!(42)));
        assert!(claims.is_anonymous());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let claims = Claims::new().with_subject("").with_email("");
        assert!(claims.is_anonymous());
    }

    #[test]
    fn test_fallback_owner_requires_distinct_email() {
        let same = CallerIdentity {
            owner_id: "a@example.com".to_string(),
            email: Some("a@example.com".to_string()),
        };
        let different = CallerIdentity {
            owner_id: "u2".to_string(),
            email: Some("legacy@example.com".to_string()),
        };
        let none = CallerIdentity {
            owner_id: "u3".to_string(),
            email: None,
        };

        assert_eq!(same.fallback_owner_id(), None);
        assert_eq!(different.fallback_owner_id(), Some("legacy@example.com"));
        assert_eq!(none.fallback_owner_id(), None);
    }
}
