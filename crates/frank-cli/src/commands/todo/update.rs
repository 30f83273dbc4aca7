use frank_db::updates::todo::{TodoUpdate, TodoUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::todo::TodoEditArgs;
use crate::commands::shared::parse::{clearable_date, clearable_text};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &TodoEditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    let todo = ctx.service.update_todo(&args.id, update).await?;
    output(&todo, flags.format)
}

fn build_update(args: &TodoEditArgs) -> anyhow::Result<TodoUpdate> {
    if args.title.is_none()
        && args.content.is_none()
        && args.due.is_none()
        && args.quadrant.is_none()
        && args.week.is_none()
    {
        anyhow::bail!(
            "At least one of --title, --content, --due, --quadrant, or --week must be provided"
        );
    }

    let mut builder = TodoUpdateBuilder::new();
    if let Some(title) = args.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(content) = clearable_text(args.content.as_ref()) {
        builder = builder.content(content);
    }
    if let Some(due) = clearable_date(args.due.as_deref(), "due")? {
        builder = builder.due_date(due);
    }
    if let Some(quadrant) = args.quadrant {
        builder = builder.quadrant(quadrant);
    }
    if let Some(week) = clearable_text(args.week.as_ref()) {
        builder = builder.weekly_plan_id(week);
    }
    Ok(builder.build())
}
