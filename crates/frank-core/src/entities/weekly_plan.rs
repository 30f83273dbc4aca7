use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A plan for one week, optionally serving a monthly goal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeeklyPlan {
    pub id: String,
    pub user_id: String,
    pub month_goal_id: Option<String>,
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub theme: Option<String>,
    pub focus: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
