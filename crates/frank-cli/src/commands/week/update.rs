use frank_db::updates::weekly_plan::{WeeklyPlanUpdate, WeeklyPlanUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::week::WeekEditArgs;
use crate::commands::shared::parse::clearable_text;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &WeekEditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    let plan = ctx.service.update_weekly_plan(&args.id, update).await?;
    output(&plan, flags.format)
}

fn build_update(args: &WeekEditArgs) -> anyhow::Result<WeeklyPlanUpdate> {
    if args.start.is_none()
        && args.end.is_none()
        && args.theme.is_none()
        && args.focus.is_none()
        && args.month_goal.is_none()
    {
        anyhow::bail!(
            "At least one of --start, --end, --theme, --focus, or --month-goal must be provided"
        );
    }

    let mut builder = WeeklyPlanUpdateBuilder::new();
    if let Some(start) = args.start {
        builder = builder.week_start_date(start);
    }
    if let Some(end) = args.end {
        builder = builder.week_end_date(end);
    }
    if let Some(theme) = clearable_text(args.theme.as_ref()) {
        builder = builder.theme(theme);
    }
    if let Some(focus) = clearable_text(args.focus.as_ref()) {
        builder = builder.focus(focus);
    }
    if let Some(month_goal) = clearable_text(args.month_goal.as_ref()) {
        builder = builder.month_goal_id(month_goal);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn args() -> WeekEditArgs {
        WeekEditArgs {
            id: "w1".into(),
            start: None,
            end: None,
            theme: None,
            focus: None,
            month_goal: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(build_update(&args()).is_err());
    }

    #[test]
    fn maps_dates_and_clears_theme() {
        let update = build_update(&WeekEditArgs {
            start: NaiveDate::from_ymd_opt(2024, 6, 2),
            theme: Some(String::new()),
            ..args()
        })
        .unwrap();
        assert_eq!(update.week_start_date, NaiveDate::from_ymd_opt(2024, 6, 2));
        assert_eq!(update.week_end_date, None);
        assert_eq!(update.theme, Some(Some(String::new())));
        assert_eq!(update.focus, None);
    }
}
