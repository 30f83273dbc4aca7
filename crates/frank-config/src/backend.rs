//! Hosted backend (table API + auth API) configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project base URL (e.g., `https://abc123.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anonymous API key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Check if both the URL and the anon key are set.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Base URL of the table API: `{url}/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base())
    }

    /// Base URL of the auth API: `{url}/auth/v1`.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.base())
    }

    fn base(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Check that the backend section is usable for remote calls.
    ///
    /// # Errors
    ///
    /// `NotConfigured` when the URL or key is missing, `InvalidValue` when the
    /// URL is not http(s) or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "backend".into(),
            });
        }
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "backend.url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> BackendConfig {
        BackendConfig {
            url: "https://abc123.supabase.co/".into(),
            anon_key: "anon".into(),
            ..Default::default()
        }
    }

    #[test]
    fn default_is_not_configured() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 30);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn endpoint_urls_strip_trailing_slash() {
        let config = configured();
        assert_eq!(config.rest_url(), "https://abc123.supabase.co/rest/v1");
        assert_eq!(config.auth_url(), "https://abc123.supabase.co/auth/v1");
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let config = BackendConfig {
            url: "abc123.supabase.co".into(),
            ..configured()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("backend.url"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn validate_accepts_configured() {
        assert!(configured().validate().is_ok());
    }
}
