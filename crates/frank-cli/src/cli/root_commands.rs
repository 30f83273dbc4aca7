use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, GoalCommands, ReviewCommands, TodoCommands, ValueCommands, WeekCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign up, log in, log out, or show the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// To-do counters and this year's goal count.
    Dashboard,
    /// Core values, in priority order.
    Value {
        #[command(subcommand)]
        action: ValueCommands,
    },
    /// Annual and monthly goals.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Weekly plans.
    Week {
        #[command(subcommand)]
        action: WeekCommands,
    },
    /// To-dos and the quadrant matrix.
    Todo {
        #[command(subcommand)]
        action: TodoCommands,
    },
    /// Weekly and daily reviews.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
}
