use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Weekly reviews.
    Weekly {
        #[command(subcommand)]
        action: WeeklyReviewCommands,
    },
    /// Daily reviews.
    Daily {
        #[command(subcommand)]
        action: DailyReviewCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum WeeklyReviewCommands {
    /// List weekly reviews, newest first.
    List,
    /// Review a weekly plan.
    Add {
        /// Weekly plan id.
        #[arg(long)]
        plan: String,
        #[command(flatten)]
        text: WeeklyReviewText,
    },
    /// Edit a weekly review. Empty flags clear the field.
    Edit {
        id: String,
        #[command(flatten)]
        text: WeeklyReviewText,
    },
    /// Delete a weekly review.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct WeeklyReviewText {
    #[arg(long)]
    pub went_well: Option<String>,
    #[arg(long)]
    pub improve: Option<String>,
    #[arg(long)]
    pub wins: Option<String>,
    #[arg(long)]
    pub learnings: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum DailyReviewCommands {
    /// List daily reviews, most recent day first.
    List,
    /// Add a daily review (date defaults to today).
    Add {
        /// Review date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        #[command(flatten)]
        text: DailyReviewText,
    },
    /// Edit a daily review. Empty flags clear the field.
    Edit {
        id: String,
        #[command(flatten)]
        text: DailyReviewText,
    },
    /// Delete a daily review.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct DailyReviewText {
    #[arg(long)]
    pub gratitude: Option<String>,
    #[arg(long)]
    pub wins: Option<String>,
    #[arg(long)]
    pub improvements: Option<String>,
    #[arg(long)]
    pub tomorrow: Option<String>,
}
