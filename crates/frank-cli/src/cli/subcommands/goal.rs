use clap::Subcommand;

/// Goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// Annual goals.
    Annual {
        #[command(subcommand)]
        action: AnnualGoalCommands,
    },
    /// Monthly goals.
    Monthly {
        #[command(subcommand)]
        action: MonthlyGoalCommands,
    },
    /// Annual goals with their value and monthly breakdown.
    Tree,
}

#[derive(Clone, Debug, Subcommand)]
pub enum AnnualGoalCommands {
    /// List annual goals, newest year first.
    List,
    /// Add an annual goal (year defaults to the current year).
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Value this goal serves.
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Edit an annual goal. An empty --value unlinks it.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Delete an annual goal.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum MonthlyGoalCommands {
    /// List monthly goals, newest first.
    List,
    /// Add a monthly goal under an annual goal.
    Add {
        title: String,
        /// Annual goal id.
        #[arg(long)]
        annual: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit a monthly goal.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        annual: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Delete a monthly goal.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}
