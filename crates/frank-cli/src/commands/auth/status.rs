use frank_auth::Session;
use frank_core::responses::AuthStatusResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `frank auth status`. Reads the store only; never refreshes.
pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = status_response(
        frank_auth::token_store::load().as_ref(),
        frank_auth::token_store::detect_token_source(),
    );
    output(&response, flags.format)
}

fn status_response(session: Option<&Session>, token_source: Option<String>) -> AuthStatusResponse {
    session.map_or(
        AuthStatusResponse {
            authenticated: false,
            user_id: None,
            email: None,
            token_source: None,
            expires_at: None,
            expired: false,
        },
        |session| {
            let expired = session.is_expired();
            AuthStatusResponse {
                authenticated: !expired || session.can_refresh(),
                user_id: Some(session.user.id.clone()),
                email: session.user.email.clone(),
                token_source,
                expires_at: Some(session.expires_at.timestamp()),
                expired,
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use frank_auth::AuthUser;

    use super::*;

    fn session(offset_secs: i64, refresh_token: &str) -> Session {
        Session {
            access_token: "jwt".into(),
            refresh_token: refresh_token.into(),
            expires_at: Utc::now() + TimeDelta::seconds(offset_secs),
            user: AuthUser {
                id: "u1".into(),
                email: Some("me@example.com".into()),
            },
        }
    }

    #[test]
    fn no_session_is_unauthenticated() {
        let status = status_response(None, None);
        assert!(!status.authenticated);
        assert!(status.user_id.is_none());
    }

    #[test]
    fn live_session_reports_user() {
        let status = status_response(Some(&session(3600, "r")), Some("file".into()));
        assert!(status.authenticated);
        assert!(!status.expired);
        assert_eq!(status.user_id.as_deref(), Some("u1"));
        assert_eq!(status.token_source.as_deref(), Some("file"));
    }

    #[test]
    fn expired_session_without_refresh_is_unauthenticated() {
        let status = status_response(Some(&session(-10, "")), Some("env".into()));
        assert!(status.expired);
        assert!(!status.authenticated);
    }

    #[test]
    fn expired_session_with_refresh_still_counts() {
        let status = status_response(Some(&session(-10, "r")), Some("keyring".into()));
        assert!(status.expired);
        assert!(status.authenticated);
    }
}
