use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Weekly plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WeekCommands {
    /// List weekly plans, newest week first.
    List,
    /// Add a weekly plan (defaults to the current week).
    Add(WeekAddArgs),
    /// Edit a weekly plan. Empty text flags clear the field.
    Edit(WeekEditArgs),
    /// Delete a weekly plan.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Weekly plans with monthly goal titles and week-of-month numbers.
    Board,
}

#[derive(Clone, Debug, Args)]
pub struct WeekAddArgs {
    /// First day (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last day (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,
    #[arg(long)]
    pub theme: Option<String>,
    #[arg(long)]
    pub focus: Option<String>,
    /// Monthly goal this week serves.
    #[arg(long)]
    pub month_goal: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct WeekEditArgs {
    pub id: String,
    #[arg(long)]
    pub start: Option<NaiveDate>,
    #[arg(long)]
    pub end: Option<NaiveDate>,
    #[arg(long)]
    pub theme: Option<String>,
    #[arg(long)]
    pub focus: Option<String>,
    #[arg(long)]
    pub month_goal: Option<String>,
}
