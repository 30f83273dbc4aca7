use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(user_id = %ctx.session.user.id, "dispatching command");
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Value { action } => commands::value::handle(&action, ctx, flags).await,
        Commands::Goal { action } => commands::goal::handle(&action, ctx, flags).await,
        Commands::Week { action } => commands::week::handle(&action, ctx, flags).await,
        Commands::Todo { action } => commands::todo::handle(&action, ctx, flags).await,
        Commands::Review { action } => commands::review::handle(&action, ctx, flags).await,
        Commands::Auth { .. } => {
            anyhow::bail!("auth commands run before the planner context is opened")
        }
    }
}
