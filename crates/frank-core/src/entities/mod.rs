//! Record structs for the planner tables.
//!
//! Each struct mirrors one backend table row as returned by the REST API.
//! `id`, `user_id`, `created_at` and `updated_at` are filled in by the
//! backend. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema validation.

mod goal;
mod review;
mod todo;
mod value;
mod weekly_plan;

pub use goal::{AnnualGoal, MonthlyGoal};
pub use review::{DailyReview, WeeklyReview};
pub use todo::Todo;
pub use value::Value;
pub use weekly_plan::WeeklyPlan;
