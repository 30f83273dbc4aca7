//! Email/password client for the hosted auth API (`{url}/auth/v1`).

use std::time::Duration;

use chrono::Utc;
use reqwest::RequestBuilder;
use serde_json::json;

use crate::error::AuthError;
use crate::session::{Session, SignUpOutcome, TokenResponse, parse_sign_up};

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
}

impl AuthClient {
    /// Build a client for `auth_url` (e.g. `https://abc.supabase.co/auth/v1`).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Http` if the HTTP client cannot be constructed.
    pub fn new(
        auth_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            auth_url: auth_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// `Api` for rejected sign-ups (e.g. weak password, already registered),
    /// `Http` for transport failures.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        tracing::debug!(email, "auth: sign up");
        let resp = check_response(self.sign_up_request(email, password).send().await?).await?;
        let body: serde_json::Value = resp.json().await?;
        parse_sign_up(email, body, Utc::now())
    }

    /// Exchange email and password for a session.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for a wrong email/password pair, `Api` for other
    /// rejections (e.g. unconfirmed email).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tracing::debug!(email, "auth: sign in");
        let resp = self.sign_in_request(email, password).send().await?;
        let resp = check_response(resp).await.map_err(sign_in_error)?;
        let token: TokenResponse = resp.json().await?;
        token.into_session(Utc::now())
    }

    /// Exchange a refresh token for a new session.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when the refresh token is rejected.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        tracing::debug!("auth: refresh session");
        let resp = self.refresh_request(refresh_token).send().await?;
        let resp = check_response(resp).await.map_err(|e| match e {
            AuthError::Api { status, .. } if status == 400 || status == 401 => {
                AuthError::NotAuthenticated
            }
            other => other,
        })?;
        let token: TokenResponse = resp.json().await?;
        token.into_session(Utc::now())
    }

    /// Revoke the session server-side.
    ///
    /// # Errors
    ///
    /// `Api`/`Http` when the call fails.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        tracing::debug!("auth: sign out");
        check_response(self.sign_out_request(access_token).send().await?).await?;
        Ok(())
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}/{path}", self.auth_url))
            .header("apikey", &self.anon_key)
    }

    fn sign_up_request(&self, email: &str, password: &str) -> RequestBuilder {
        self.post("signup")
            .json(&json!({ "email": email, "password": password }))
    }

    fn sign_in_request(&self, email: &str, password: &str) -> RequestBuilder {
        self.post("token?grant_type=password")
            .json(&json!({ "email": email, "password": password }))
    }

    fn refresh_request(&self, refresh_token: &str) -> RequestBuilder {
        self.post("token?grant_type=refresh_token")
            .json(&json!({ "refresh_token": refresh_token }))
    }

    fn sign_out_request(&self, access_token: &str) -> RequestBuilder {
        self.post("logout").bearer_auth(access_token)
    }
}

/// Map non-success statuses to [`AuthError::Api`] with the API's message.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AuthError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body);
    tracing::warn!(status, %message, "auth request failed");
    Err(AuthError::Api { status, message })
}

/// Pull the human-readable message out of an auth API error body.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map_or_else(|| body.trim().to_string(), ToString::to_string)
}

fn sign_in_error(err: AuthError) -> AuthError {
    match err {
        AuthError::Api { status: 400, ref message }
            if message.to_lowercase().contains("invalid login credentials") =>
        {
            AuthError::InvalidCredentials
        }
        other => other,
    }
}
