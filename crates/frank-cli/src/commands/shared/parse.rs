use chrono::NaiveDate;
use frank_core::dates;

/// Parse a clearable date flag: absent leaves the field alone, an empty
/// value clears it, anything else must be `YYYY-MM-DD`.
pub fn clearable_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Option<NaiveDate>>> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Ok(Some(None)),
        Some(value) => dates::parse_date(value)
            .map(|date| Some(Some(date)))
            .map_err(|error| anyhow::anyhow!("invalid --{field}: {error}")),
    }
}

/// Wrap a clearable text flag for an update builder. Blank values are
/// normalized to NULL by the repository.
#[must_use]
pub fn clearable_text(raw: Option<&String>) -> Option<Option<String>> {
    raw.map(|value| Some(value.clone()))
}
