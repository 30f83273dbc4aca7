//! Weekly plan update builder.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WeeklyPlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_goal_id: Option<Option<String>>,
}

pub struct WeeklyPlanUpdateBuilder(WeeklyPlanUpdate);

impl WeeklyPlanUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(WeeklyPlanUpdate::default())
    }

    #[must_use]
    pub const fn week_start_date(mut self, date: NaiveDate) -> Self {
        self.0.week_start_date = Some(date);
        self
    }

    #[must_use]
    pub const fn week_end_date(mut self, date: NaiveDate) -> Self {
        self.0.week_end_date = Some(date);
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Option<String>) -> Self {
        self.0.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn focus(mut self, focus: Option<String>) -> Self {
        self.0.focus = Some(focus);
        self
    }

    #[must_use]
    pub fn month_goal_id(mut self, month_goal_id: Option<String>) -> Self {
        self.0.month_goal_id = Some(month_goal_id);
        self
    }

    #[must_use]
    pub fn build(self) -> WeeklyPlanUpdate {
        self.0
    }
}

impl Default for WeeklyPlanUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
