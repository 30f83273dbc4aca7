use frank_core::enums::Table;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::{confirm_delete, declined};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !confirm_delete(Table::Values, id, yes)? {
        return output(&declined(Table::Values, id), flags.format);
    }
    let response = ctx.service.delete_value(id).await?;
    output(&response, flags.format)
}
