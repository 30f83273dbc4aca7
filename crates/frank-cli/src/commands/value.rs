use crate::cli::GlobalFlags;
use crate::cli::subcommands::ValueCommands;
use crate::context::AppContext;

mod create;
mod delete;
mod list;
mod reorder;
mod update;

/// Handle `frank value`.
pub async fn handle(
    action: &ValueCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ValueCommands::List => list::run(ctx, flags).await,
        ValueCommands::Add { title, description } => {
            create::run(title, description.as_deref(), ctx, flags).await
        }
        ValueCommands::Edit {
            id,
            title,
            description,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        ValueCommands::Move { id, position } => reorder::run(id, *position, ctx, flags).await,
        ValueCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
    }
}
