//! # frank-auth
//!
//! Email/password authentication against the hosted auth API.
//!
//! Provides sign-up / sign-in / refresh / sign-out calls, OS keychain session
//! storage (`keyring`) with env and file fallbacks, and best-effort JWT claim
//! decoding for expiry checks.

pub mod claims;
pub mod client;
pub mod error;
pub mod session;
pub mod token_store;

pub use claims::{Claims, decode_claims};
pub use client::AuthClient;
pub use error::AuthError;
pub use session::{AuthUser, Session, SignUpOutcome};

/// Sessions expiring within this window are refreshed before use.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Resolve the stored access token without refreshing.
///
/// Priority: keyring → env var → file.
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load().map(|s| s.access_token)
}

/// Load the stored session, refreshing it when it is about to expire.
///
/// A refreshed session is written back to the store. Returns `None` when no
/// session is stored or the stored one can no longer be refreshed.
pub async fn resolve_session(client: &AuthClient) -> Option<Session> {
    let session = token_store::load()?;
    if !session.is_near_expiry(EXPIRY_BUFFER_SECS) {
        return Some(session);
    }
    if !session.can_refresh() {
        tracing::warn!(
            expires_at = %session.expires_at,
            "session expires within {EXPIRY_BUFFER_SECS}s and has no refresh token; run `frank auth login`",
        );
        return None;
    }

    match client.refresh(&session.refresh_token).await {
        Ok(refreshed) => {
            if let Err(error) = token_store::store(&refreshed) {
                tracing::warn!(%error, "failed to persist refreshed session");
            }
            Some(refreshed)
        }
        Err(error) => {
            tracing::warn!(%error, "session refresh failed");
            None
        }
    }
}

/// Sign in and persist the resulting session.
///
/// # Errors
///
/// Returns the sign-in error, or `TokenStoreError` if the session cannot be stored.
pub async fn login(client: &AuthClient, email: &str, password: &str) -> Result<Session, AuthError> {
    let session = client.sign_in(email, password).await?;
    token_store::store(&session)?;
    Ok(session)
}

/// Revoke the stored session (best effort) and clear local credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the session file cannot be removed.
pub async fn logout(client: Option<&AuthClient>) -> Result<(), AuthError> {
    if let (Some(client), Some(session)) = (client, token_store::load()) {
        if let Err(error) = client.sign_out(&session.access_token).await {
            tracing::warn!(%error, "server-side sign out failed; clearing local session anyway");
        }
    }
    token_store::delete()
}
