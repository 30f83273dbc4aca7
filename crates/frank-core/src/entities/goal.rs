use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A goal for a calendar year, optionally tied to a value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnnualGoal {
    pub id: String,
    pub user_id: String,
    pub value_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A goal for one month, broken out of an annual goal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthlyGoal {
    pub id: String,
    pub user_id: String,
    pub annual_goal_id: String,
    pub title: String,
    pub description: Option<String>,
    /// 1 = January.
    pub month: u32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
