use frank_core::enums::GoalKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AnnualGoalCommands, GoalCommands, MonthlyGoalCommands};
use crate::context::AppContext;
use crate::output::output;

mod annual;
mod delete;
mod monthly;

/// Handle `frank goal`.
pub async fn handle(
    action: &GoalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GoalCommands::Annual { action } => handle_annual(action, ctx, flags).await,
        GoalCommands::Monthly { action } => handle_monthly(action, ctx, flags).await,
        GoalCommands::Tree => output(&ctx.service.goal_tree().await?, flags.format),
    }
}

async fn handle_annual(
    action: &AnnualGoalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnnualGoalCommands::List => annual::list(ctx, flags).await,
        AnnualGoalCommands::Add {
            title,
            description,
            value,
            year,
        } => {
            annual::create(
                title,
                description.as_deref(),
                value.as_deref(),
                *year,
                ctx,
                flags,
            )
            .await
        }
        AnnualGoalCommands::Edit {
            id,
            title,
            description,
            value,
            year,
        } => {
            annual::update(
                annual::UpdateParams {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    value: value.clone(),
                    year: *year,
                },
                ctx,
                flags,
            )
            .await
        }
        AnnualGoalCommands::Delete { id, yes } => {
            delete::run(GoalKind::Annual, id, *yes, ctx, flags).await
        }
    }
}

async fn handle_monthly(
    action: &MonthlyGoalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MonthlyGoalCommands::List => monthly::list(ctx, flags).await,
        MonthlyGoalCommands::Add {
            title,
            annual,
            month,
            year,
            description,
        } => {
            monthly::create(
                monthly::CreateParams {
                    annual_goal_id: annual.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    month: *month,
                    year: *year,
                },
                ctx,
                flags,
            )
            .await
        }
        MonthlyGoalCommands::Edit {
            id,
            title,
            description,
            annual,
            month,
            year,
        } => {
            monthly::update(
                monthly::UpdateParams {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    annual: annual.clone(),
                    month: *month,
                    year: *year,
                },
                ctx,
                flags,
            )
            .await
        }
        MonthlyGoalCommands::Delete { id, yes } => {
            delete::run(GoalKind::Monthly, id, *yes, ctx, flags).await
        }
    }
}
