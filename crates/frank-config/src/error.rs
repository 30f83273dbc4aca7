//! Errors from loading and checking the `backend` and `general` sections.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `FRANK_*` variable could not be merged or extracted.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs is still at its empty defaults
    /// (today only `backend`: URL and anon key).
    #[error(
        "[{section}] is not configured: set FRANK_{}__* or add [{section}] to .frank/config.toml",
        .section.to_uppercase()
    )]
    NotConfigured { section: String },

    /// A field is present but unusable, e.g. a non-http `backend.url`.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn not_configured_names_env_prefix_and_file() {
        let err = ConfigError::NotConfigured {
            section: "backend".into(),
        };
        let message = err.to_string();
        assert!(message.starts_with("[backend] is not configured"));
        assert!(message.contains("FRANK_BACKEND__*"));
        assert!(message.contains(".frank/config.toml"));
    }

    #[test]
    fn invalid_value_names_field() {
        let err = ConfigError::InvalidValue {
            field: "general.default_limit".into(),
            reason: "must be greater than zero".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'general.default_limit': must be greater than zero"
        );
    }
}
