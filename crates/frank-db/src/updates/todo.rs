//! To-do update builder.

use chrono::NaiveDate;
use frank_core::enums::Quadrant;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<Quadrant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_plan_id: Option<Option<String>>,
}

pub struct TodoUpdateBuilder(TodoUpdate);

impl TodoUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TodoUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: Option<String>) -> Self {
        self.0.content = Some(content);
        self
    }

    #[must_use]
    pub const fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub const fn quadrant(mut self, quadrant: Quadrant) -> Self {
        self.0.quadrant = Some(quadrant);
        self
    }

    #[must_use]
    pub const fn completed(mut self, completed: bool) -> Self {
        self.0.completed = Some(completed);
        self
    }

    #[must_use]
    pub fn weekly_plan_id(mut self, weekly_plan_id: Option<String>) -> Self {
        self.0.weekly_plan_id = Some(weekly_plan_id);
        self
    }

    #[must_use]
    pub fn build(self) -> TodoUpdate {
        self.0
    }
}

impl Default for TodoUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
