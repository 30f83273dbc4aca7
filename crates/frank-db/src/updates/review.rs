//! Weekly and daily review update builders.
//!
//! Only the reflective text fields are editable; the plan link and review
//! date are fixed at creation.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WeeklyReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_went_well: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_could_improve: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learnings: Option<Option<String>>,
}

pub struct WeeklyReviewUpdateBuilder(WeeklyReviewUpdate);

impl WeeklyReviewUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(WeeklyReviewUpdate::default())
    }

    #[must_use]
    pub fn what_went_well(mut self, text: Option<String>) -> Self {
        self.0.what_went_well = Some(text);
        self
    }

    #[must_use]
    pub fn what_could_improve(mut self, text: Option<String>) -> Self {
        self.0.what_could_improve = Some(text);
        self
    }

    #[must_use]
    pub fn wins(mut self, text: Option<String>) -> Self {
        self.0.wins = Some(text);
        self
    }

    #[must_use]
    pub fn learnings(mut self, text: Option<String>) -> Self {
        self.0.learnings = Some(text);
        self
    }

    #[must_use]
    pub fn build(self) -> WeeklyReviewUpdate {
        self.0
    }
}

impl Default for WeeklyReviewUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gratitude: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tomorrow_focus: Option<Option<String>>,
}

pub struct DailyReviewUpdateBuilder(DailyReviewUpdate);

impl DailyReviewUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(DailyReviewUpdate::default())
    }

    #[must_use]
    pub fn gratitude(mut self, text: Option<String>) -> Self {
        self.0.gratitude = Some(text);
        self
    }

    #[must_use]
    pub fn wins(mut self, text: Option<String>) -> Self {
        self.0.wins = Some(text);
        self
    }

    #[must_use]
    pub fn improvements(mut self, text: Option<String>) -> Self {
        self.0.improvements = Some(text);
        self
    }

    #[must_use]
    pub fn tomorrow_focus(mut self, text: Option<String>) -> Self {
        self.0.tomorrow_focus = Some(text);
        self
    }

    #[must_use]
    pub fn build(self) -> DailyReviewUpdate {
        self.0
    }
}

impl Default for DailyReviewUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
