use frank_core::enums::ReviewKind;
use frank_db::repos::reviews::DailyReviewFields;
use frank_db::updates::review::{DailyReviewUpdate, DailyReviewUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DailyReviewCommands;
use crate::cli::subcommands::review::DailyReviewText;
use crate::commands::shared::confirm::{confirm_delete, declined};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::clearable_text;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &DailyReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DailyReviewCommands::List => {
            let reviews = ctx.service.list_daily_reviews().await?;
            output(&apply_limit(reviews, ctx, flags), flags.format)
        }
        DailyReviewCommands::Add { date, text } => {
            let review = ctx
                .service
                .create_daily_review(*date, fields(text))
                .await?;
            tracing::info!(id = %review.id, review_date = %review.review_date, "daily review created");
            output(&review, flags.format)
        }
        DailyReviewCommands::Edit { id, text } => {
            let review = ctx
                .service
                .update_daily_review(id, build_update(text)?)
                .await?;
            output(&review, flags.format)
        }
        DailyReviewCommands::Delete { id, yes } => {
            let table = ReviewKind::Daily.table();
            if !confirm_delete(table, id, *yes)? {
                return output(&declined(table, id), flags.format);
            }
            let response = ctx.service.delete_review(ReviewKind::Daily, id).await?;
            output(&response, flags.format)
        }
    }
}

fn fields(text: &DailyReviewText) -> DailyReviewFields {
    DailyReviewFields {
        gratitude: text.gratitude.clone(),
        wins: text.wins.clone(),
        improvements: text.improvements.clone(),
        tomorrow_focus: text.tomorrow.clone(),
    }
}

fn build_update(text: &DailyReviewText) -> anyhow::Result<DailyReviewUpdate> {
    if text.gratitude.is_none()
        && text.wins.is_none()
        && text.improvements.is_none()
        && text.tomorrow.is_none()
    {
        anyhow::bail!(
            "At least one of --gratitude, --wins, --improvements, or --tomorrow must be provided"
        );
    }

    let mut builder = DailyReviewUpdateBuilder::new();
    if let Some(value) = clearable_text(text.gratitude.as_ref()) {
        builder = builder.gratitude(value);
    }
    if let Some(value) = clearable_text(text.wins.as_ref()) {
        builder = builder.wins(value);
    }
    if let Some(value) = clearable_text(text.improvements.as_ref()) {
        builder = builder.improvements(value);
    }
    if let Some(value) = clearable_text(text.tomorrow.as_ref()) {
        builder = builder.tomorrow_focus(value);
    }
    Ok(builder.build())
}
