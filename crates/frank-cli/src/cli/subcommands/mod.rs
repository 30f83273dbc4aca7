pub mod auth;
pub mod goal;
pub mod review;
pub mod todo;
pub mod value;
pub mod week;

pub use auth::AuthCommands;
pub use goal::{AnnualGoalCommands, GoalCommands, MonthlyGoalCommands};
pub use review::{DailyReviewCommands, ReviewCommands, WeeklyReviewCommands};
pub use todo::TodoCommands;
pub use value::ValueCommands;
pub use week::WeekCommands;
