use frank_core::enums::GoalKind;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::{confirm_delete, declined};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    kind: GoalKind,
    id: &str,
    yes: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !confirm_delete(kind.table(), id, yes)? {
        return output(&declined(kind.table(), id), flags.format);
    }
    let response = ctx.service.delete_goal(kind, id).await?;
    output(&response, flags.format)
}
