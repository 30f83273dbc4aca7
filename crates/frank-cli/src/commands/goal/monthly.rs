use frank_db::updates::goal::MonthlyGoalUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::clearable_text;
use crate::context::AppContext;
use crate::output::output;

pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let goals = ctx.service.list_monthly_goals().await?;
    output(&apply_limit(goals, ctx, flags), flags.format)
}

pub struct CreateParams {
    pub annual_goal_id: String,
    pub title: String,
    pub description: Option<String>,
    pub month: u32,
    pub year: Option<i32>,
}

pub async fn create(
    params: CreateParams,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let goal = ctx
        .service
        .create_monthly_goal(
            &params.annual_goal_id,
            &params.title,
            params.description.as_deref(),
            params.month,
            params.year,
        )
        .await?;
    tracing::info!(id = %goal.id, month = goal.month, year = goal.year, "monthly goal created");
    output(&goal, flags.format)
}

pub struct UpdateParams {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub annual: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

pub async fn update(
    params: UpdateParams,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = MonthlyGoalUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = clearable_text(params.description.as_ref()) {
        builder = builder.description(description);
    }
    if let Some(annual) = params.annual.as_deref() {
        builder = builder.annual_goal_id(annual);
    }
    if let Some(month) = params.month {
        builder = builder.month(month);
    }
    if let Some(year) = params.year {
        builder = builder.year(year);
    }

    let goal = ctx
        .service
        .update_monthly_goal(&params.id, builder.build())
        .await?;
    output(&goal, flags.format)
}

fn validate_update_params(params: &UpdateParams) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && params.annual.is_none()
        && params.month.is_none()
        && params.year.is_none()
    {
        anyhow::bail!(
            "At least one of --title, --description, --annual, --month, or --year must be provided"
        );
    }
    Ok(())
}
