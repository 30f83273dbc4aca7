use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = ctx.service.create_value(title, description).await?;
    tracing::info!(id = %value.id, priority = value.priority, "value created");
    output(&value, flags.format)
}
