use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::enums::Quadrant;

/// A to-do item placed in one of the four urgency/importance quadrants.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub weekly_plan_id: Option<String>,
    pub title: String,
    pub content: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub quadrant: Quadrant,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Due strictly before `today` and still open.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        dates::is_overdue(self.due_date, self.completed, today)
    }

    #[must_use]
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_date == Some(day)
    }
}
