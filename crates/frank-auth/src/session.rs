use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::claims::decode_claims;
use crate::error::AuthError;

/// The signed-in user as reported by the auth API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// An access/refresh token pair with its expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    /// Empty when the session was built from a bare access token.
    #[serde(default)]
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl Session {
    /// Check if the access token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at <= Utc::now() + TimeDelta::seconds(buffer_secs)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_near_expiry(0)
    }

    #[must_use]
    pub fn can_refresh(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    /// Build a session from a bare access token by reading its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Other` when the token cannot be decoded.
    pub fn from_access_token(access_token: &str) -> Result<Self, AuthError> {
        let claims = decode_claims(access_token)?;
        Ok(Self {
            access_token: access_token.to_string(),
            refresh_token: String::new(),
            expires_at: claims.expires_at,
            user: AuthUser {
                id: claims.user_id,
                email: claims.email,
            },
        })
    }
}

/// Result of a sign-up call.
///
/// When email confirmation is enabled the API returns only the user and no
/// session; the user must confirm before signing in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user_id: Option<String>,
    pub email: String,
    pub confirmation_required: bool,
    pub session: Option<Session>,
}

/// Token endpoint response body.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    pub(crate) fn into_session(self, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(at), _) => DateTime::from_timestamp(at, 0)
                .ok_or_else(|| AuthError::Other(format!("invalid expires_at {at}")))?,
            (None, Some(secs)) => now + TimeDelta::seconds(secs),
            (None, None) => decode_claims(&self.access_token)?.expires_at,
        };
        Ok(Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token.unwrap_or_default(),
            expires_at,
            user: self.user,
        })
    }
}

/// Interpret a sign-up response body.
pub(crate) fn parse_sign_up(
    email: &str,
    body: serde_json::Value,
    now: DateTime<Utc>,
) -> Result<SignUpOutcome, AuthError> {
    if body.get("access_token").is_some() {
        let token: TokenResponse = serde_json::from_value(body)
            .map_err(|e| AuthError::Other(format!("unexpected sign-up response: {e}")))?;
        let session = token.into_session(now)?;
        return Ok(SignUpOutcome {
            user_id: Some(session.user.id.clone()),
            email: session.user.email.clone().unwrap_or_else(|| email.to_string()),
            confirmation_required: false,
            session: Some(session),
        });
    }

    let user = body.get("user").unwrap_or(&body);
    Ok(SignUpOutcome {
        user_id: user.get("id").and_then(|v| v.as_str()).map(ToString::to_string),
        email: user
            .get("email")
            .and_then(|v| v.as_str())
            .unwrap_or(email)
            .to_string(),
        confirmation_required: true,
        session: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::make_jwt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_715_000_000, 0).unwrap()
    }

    #[test]
    fn token_response_prefers_expires_at() {
        let token: TokenResponse = serde_json::from_value(json!({
            "access_token": "a.b.c",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1_715_003_000,
            "refresh_token": "r1",
            "user": {"id": "u1", "email": "ann@example.com", "aud": "authenticated"}
        }))
        .unwrap();
        let session = token.into_session(now()).unwrap();
        assert_eq!(session.expires_at.timestamp(), 1_715_003_000);
        assert_eq!(session.refresh_token, "r1");
        assert_eq!(session.user.id, "u1");
    }

    #[test]
    fn token_response_falls_back_to_expires_in() {
        let token: TokenResponse = serde_json::from_value(json!({
            "access_token": "a.b.c",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": {"id": "u1"}
        }))
        .unwrap();
        let session = token.into_session(now()).unwrap();
        assert_eq!(session.expires_at.timestamp(), 1_715_003_600);
        assert_eq!(session.user.email, None);
    }

    #[test]
    fn sign_up_with_confirmation_pending() {
        let body = json!({
            "id": "u-new",
            "email": "ann@example.com",
            "confirmation_sent_at": "2024-05-06T12:00:00Z"
        });
        let outcome = parse_sign_up("ann@example.com", body, now()).unwrap();
        assert!(outcome.confirmation_required);
        assert_eq!(outcome.user_id.as_deref(), Some("u-new"));
        assert!(outcome.session.is_none());
    }

    #[test]
    fn sign_up_with_autoconfirm_returns_session() {
        let body = json!({
            "access_token": "a.b.c",
            "expires_in": 60,
            "refresh_token": "r",
            "user": {"id": "u-new", "email": "ann@example.com"}
        });
        let outcome = parse_sign_up("ann@example.com", body, now()).unwrap();
        assert!(!outcome.confirmation_required);
        assert_eq!(outcome.session.unwrap().refresh_token, "r");
    }

    #[test]
    fn session_from_bare_token() {
        let exp = Utc::now().timestamp() + 600;
        let jwt = make_jwt(&format!(r#"{{"sub":"u9","email":"z@example.com","exp":{exp}}}"#));
        let session = Session::from_access_token(&jwt).unwrap();
        assert_eq!(session.user.id, "u9");
        assert!(!session.can_refresh());
        assert!(!session.is_expired());
    }

    #[test]
    fn session_json_roundtrip() {
        let session = Session {
            access_token: "a.b.c".into(),
            refresh_token: "r".into(),
            expires_at: now(),
            user: AuthUser {
                id: "u1".into(),
                email: Some("ann@example.com".into()),
            },
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        assert!(back.is_expired());
    }
}
