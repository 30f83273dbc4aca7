use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// Claims read from an access token payload.
///
/// Decoded WITHOUT signature verification. The backend verifies the token on
/// every request; the client only needs the subject and expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User id (`sub` claim).
    pub user_id: String,
    pub email: Option<String>,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}

#[derive(Deserialize)]
struct RawClaims {
    sub: Option<String>,
    email: Option<String>,
    exp: Option<i64>,
}

/// Decode the `sub`, `email`, and `exp` claims of a JWT.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid, the payload is not
/// JSON, or `sub`/`exp` are missing.
pub fn decode_claims(jwt: &str) -> Result<Claims, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let raw: RawClaims = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let user_id = raw
        .sub
        .ok_or_else(|| AuthError::Other("missing sub claim".into()))?;
    let exp = raw
        .exp
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    let expires_at = DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))?;
    Ok(Claims {
        user_id,
        email: raw.email,
        expires_at,
    })
}

#[cfg(test)]
pub(crate) fn make_jwt(payload: &str) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = engine.encode(payload);
    let signature = engine.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}
