//! Form input normalization.

use crate::errors::CoreError;

/// Trim a required field and reject it when blank.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` when the trimmed input is empty.
pub fn required(field: &str, input: &str) -> Result<String, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field. Blank input is stored as `None`.
#[must_use]
pub fn optional(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims() {
        assert_eq!(required("title", "  Read  ").unwrap(), "Read");
    }

    #[test]
    fn required_rejects_whitespace() {
        let err = required("title", " \t ").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: title is required");
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional(Some("   ")), None);
        assert_eq!(optional(None), None);
        assert_eq!(optional(Some(" note ")), Some("note".to_string()));
    }
}
