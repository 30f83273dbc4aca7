use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Positions past the end land at the bottom; 0 is treated as 1.
pub async fn run(id: &str, position: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.service.move_value(id, position).await?;
    tracing::info!(id, position, renumbered = response.renumbered, "value moved");
    output(&response, flags.format)
}
