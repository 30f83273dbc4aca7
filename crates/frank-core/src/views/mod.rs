//! Pure view builders over already-fetched rows.
//!
//! Nothing here talks to the backend. Repositories fetch the rows and hand
//! them to these builders, which only group, join by id, and count.

mod board;
mod goal_tree;
mod matrix;
mod stats;

pub use board::{WeeklyPlanBoard, WeeklyPlanCard};
pub use goal_tree::{AnnualGoalNode, GoalTree};
pub use matrix::{QuadrantCell, QuadrantMatrix, TodoEntry, TodoListView};
pub use stats::{DashboardStats, completion_rate};

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, NaiveDate, Utc};

    use crate::entities::{AnnualGoal, MonthlyGoal, Todo, Value, WeeklyPlan};
    use crate::enums::Quadrant;

    pub fn ts() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    pub fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub fn todo(id: &str, quadrant: Quadrant, due: Option<&str>, completed: bool) -> Todo {
        Todo {
            id: id.into(),
            user_id: "u1".into(),
            weekly_plan_id: None,
            title: format!("todo {id}"),
            content: None,
            due_date: due.map(d),
            quadrant,
            completed,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    pub fn value(id: &str, title: &str, priority: i32) -> Value {
        Value {
            id: id.into(),
            user_id: "u1".into(),
            title: title.into(),
            description: None,
            priority,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    pub fn annual(id: &str, value_id: Option<&str>, year: i32) -> AnnualGoal {
        AnnualGoal {
            id: id.into(),
            user_id: "u1".into(),
            value_id: value_id.map(Into::into),
            title: format!("annual {id}"),
            description: None,
            year,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    pub fn monthly(id: &str, annual_goal_id: &str, month: u32) -> MonthlyGoal {
        MonthlyGoal {
            id: id.into(),
            user_id: "u1".into(),
            annual_goal_id: annual_goal_id.into(),
            title: format!("monthly {id}"),
            description: None,
            month,
            year: 2024,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    pub fn plan(id: &str, start: &str, month_goal_id: Option<&str>) -> WeeklyPlan {
        let start = d(start);
        WeeklyPlan {
            id: id.into(),
            user_id: "u1".into(),
            month_goal_id: month_goal_id.map(Into::into),
            week_start_date: start,
            week_end_date: start + chrono::Duration::days(6),
            theme: None,
            focus: None,
            created_at: ts(),
            updated_at: ts(),
        }
    }
}
