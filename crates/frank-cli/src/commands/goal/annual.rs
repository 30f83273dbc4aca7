use frank_db::updates::goal::AnnualGoalUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::clearable_text;
use crate::context::AppContext;
use crate::output::output;

pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let goals = ctx.service.list_annual_goals().await?;
    output(&apply_limit(goals, ctx, flags), flags.format)
}

pub async fn create(
    title: &str,
    description: Option<&str>,
    value_id: Option<&str>,
    year: Option<i32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let goal = ctx
        .service
        .create_annual_goal(title, description, value_id, year)
        .await?;
    tracing::info!(id = %goal.id, year = goal.year, "annual goal created");
    output(&goal, flags.format)
}

pub struct UpdateParams {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub value: Option<String>,
    pub year: Option<i32>,
}

pub async fn update(
    params: UpdateParams,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = AnnualGoalUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = clearable_text(params.description.as_ref()) {
        builder = builder.description(description);
    }
    if let Some(value_id) = clearable_text(params.value.as_ref()) {
        builder = builder.value_id(value_id);
    }
    if let Some(year) = params.year {
        builder = builder.year(year);
    }

    let goal = ctx
        .service
        .update_annual_goal(&params.id, builder.build())
        .await?;
    output(&goal, flags.format)
}

fn validate_update_params(params: &UpdateParams) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && params.value.is_none()
        && params.year.is_none()
    {
        anyhow::bail!("At least one of --title, --description, --value, or --year must be provided");
    }
    Ok(())
}
