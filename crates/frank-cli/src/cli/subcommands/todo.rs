use chrono::NaiveDate;
use clap::{Args, Subcommand};
use frank_core::enums::Quadrant;

/// To-do commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TodoCommands {
    /// Open and completed to-dos, with overdue flags.
    List,
    /// Open to-dos grouped by quadrant.
    Matrix,
    /// Add a to-do.
    Add(TodoAddArgs),
    /// Edit a to-do. Empty --content/--due/--week clear the field.
    Edit(TodoEditArgs),
    /// Flip a to-do between open and completed.
    Toggle { id: String },
    /// Delete a to-do.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TodoAddArgs {
    pub title: String,
    #[arg(long)]
    pub content: Option<String>,
    /// Due date (YYYY-MM-DD).
    #[arg(long)]
    pub due: Option<NaiveDate>,
    /// 1 important+urgent, 2 important, 3 urgent, 4 neither (default 2).
    #[arg(long)]
    pub quadrant: Option<Quadrant>,
    /// Weekly plan id.
    #[arg(long)]
    pub week: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TodoEditArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub quadrant: Option<Quadrant>,
    #[arg(long)]
    pub week: Option<String>,
}
