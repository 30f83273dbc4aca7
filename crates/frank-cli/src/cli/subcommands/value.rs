use clap::Subcommand;

/// Value commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ValueCommands {
    /// List values by priority.
    List,
    /// Add a value at the bottom of the list.
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit a value. An empty --description clears it.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Move a value to a 1-based position and renumber priorities.
    Move { id: String, position: u32 },
    /// Delete a value.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}
