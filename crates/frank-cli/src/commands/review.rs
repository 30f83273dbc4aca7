use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::context::AppContext;

mod daily;
mod weekly;

/// Handle `frank review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReviewCommands::Weekly { action } => weekly::handle(action, ctx, flags).await,
        ReviewCommands::Daily { action } => daily::handle(action, ctx, flags).await,
    }
}
