//! Calendar helpers for weekly planning and due-date checks.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::enums::WeekStart;
use crate::errors::CoreError;

/// Today's date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The week containing `today`, as `(start, end)` with `end = start + 6`.
#[must_use]
pub fn default_week(today: NaiveDate, starts_on: WeekStart) -> (NaiveDate, NaiveDate) {
    let offset = match starts_on {
        WeekStart::Sunday => today.weekday().num_days_from_sunday(),
        WeekStart::Monday => today.weekday().num_days_from_monday(),
    };
    let start = today - Duration::days(i64::from(offset));
    (start, start + Duration::days(6))
}

/// Week-of-month number for a week starting on `date`.
///
/// `ceil((day - weekday + 1) / 7)` with Monday = 1 .. Sunday = 7. A week
/// that begins before the first Monday of the month still counts as week 1.
#[must_use]
pub fn week_of_month(date: NaiveDate) -> u32 {
    let day = i64::from(date.day());
    let weekday = i64::from(date.weekday().number_from_monday());
    let raw = (day - weekday + 1 + 6).div_euclid(7);
    u32::try_from(raw.max(1)).unwrap_or(1)
}

/// Due strictly before `today` and not completed.
#[must_use]
pub fn is_overdue(due: Option<NaiveDate>, completed: bool, today: NaiveDate) -> bool {
    !completed && due.is_some_and(|d| d < today)
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the input is not a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::Validation(format!("invalid date '{input}': {e}")))
}

/// Check that a week range is ordered.
///
/// # Errors
///
/// Returns `CoreError::Validation` when `end` precedes `start`.
pub fn validate_week(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation(format!(
            "week end {end} precedes week start {start}"
        )));
    }
    Ok(())
}

/// Check that a month number is 1-12.
///
/// # Errors
///
/// Returns `CoreError::Validation` for any other value.
pub fn validate_month(month: u32) -> Result<(), CoreError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )))
    }
}
