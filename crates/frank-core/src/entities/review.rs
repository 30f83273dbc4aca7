use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Retrospective on a weekly plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeeklyReview {
    pub id: String,
    pub user_id: String,
    pub weekly_plan_id: String,
    pub what_went_well: Option<String>,
    pub what_could_improve: Option<String>,
    pub wins: Option<String>,
    pub learnings: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// End-of-day reflection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyReview {
    pub id: String,
    pub user_id: String,
    pub review_date: NaiveDate,
    pub gratitude: Option<String>,
    pub wins: Option<String>,
    pub improvements: Option<String>,
    pub tomorrow_focus: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
