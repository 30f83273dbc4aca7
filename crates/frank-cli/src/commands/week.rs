use frank_core::enums::Table;
use frank_db::repos::weekly_plans::NewWeeklyPlan;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WeekCommands;
use crate::commands::shared::confirm::{confirm_delete, declined};
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

mod update;

/// Handle `frank week`.
pub async fn handle(
    action: &WeekCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WeekCommands::List => {
            let plans = ctx.service.list_weekly_plans().await?;
            output(&apply_limit(plans, ctx, flags), flags.format)
        }
        WeekCommands::Add(args) => {
            let plan = ctx
                .service
                .create_weekly_plan(NewWeeklyPlan {
                    week_start_date: args.start,
                    week_end_date: args.end,
                    theme: args.theme.clone(),
                    focus: args.focus.clone(),
                    month_goal_id: args.month_goal.clone(),
                })
                .await?;
            tracing::info!(
                id = %plan.id,
                start = %plan.week_start_date,
                end = %plan.week_end_date,
                "weekly plan created",
            );
            output(&plan, flags.format)
        }
        WeekCommands::Edit(args) => update::run(args, ctx, flags).await,
        WeekCommands::Delete { id, yes } => {
            if !confirm_delete(Table::WeeklyPlans, id, *yes)? {
                return output(&declined(Table::WeeklyPlans, id), flags.format);
            }
            output(&ctx.service.delete_weekly_plan(id).await?, flags.format)
        }
        WeekCommands::Board => output(&ctx.service.weekly_plan_board().await?, flags.format),
    }
}
