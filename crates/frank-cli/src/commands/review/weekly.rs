use frank_core::enums::ReviewKind;
use frank_db::repos::reviews::WeeklyReviewFields;
use frank_db::updates::review::{WeeklyReviewUpdate, WeeklyReviewUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WeeklyReviewCommands;
use crate::cli::subcommands::review::WeeklyReviewText;
use crate::commands::shared::confirm::{confirm_delete, declined};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::clearable_text;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &WeeklyReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WeeklyReviewCommands::List => {
            let reviews = ctx.service.list_weekly_reviews().await?;
            output(&apply_limit(reviews, ctx, flags), flags.format)
        }
        WeeklyReviewCommands::Add { plan, text } => {
            let review = ctx
                .service
                .create_weekly_review(plan, fields(text))
                .await?;
            tracing::info!(id = %review.id, weekly_plan_id = %plan, "weekly review created");
            output(&review, flags.format)
        }
        WeeklyReviewCommands::Edit { id, text } => {
            let review = ctx
                .service
                .update_weekly_review(id, build_update(text)?)
                .await?;
            output(&review, flags.format)
        }
        WeeklyReviewCommands::Delete { id, yes } => {
            let table = ReviewKind::Weekly.table();
            if !confirm_delete(table, id, *yes)? {
                return output(&declined(table, id), flags.format);
            }
            let response = ctx.service.delete_review(ReviewKind::Weekly, id).await?;
            output(&response, flags.format)
        }
    }
}

fn fields(text: &WeeklyReviewText) -> WeeklyReviewFields {
    WeeklyReviewFields {
        what_went_well: text.went_well.clone(),
        what_could_improve: text.improve.clone(),
        wins: text.wins.clone(),
        learnings: text.learnings.clone(),
    }
}

fn build_update(text: &WeeklyReviewText) -> anyhow::Result<WeeklyReviewUpdate> {
    if text.went_well.is_none()
        && text.improve.is_none()
        && text.wins.is_none()
        && text.learnings.is_none()
    {
        anyhow::bail!(
            "At least one of --went-well, --improve, --wins, or --learnings must be provided"
        );
    }

    let mut builder = WeeklyReviewUpdateBuilder::new();
    if let Some(value) = clearable_text(text.went_well.as_ref()) {
        builder = builder.what_went_well(value);
    }
    if let Some(value) = clearable_text(text.improve.as_ref()) {
        builder = builder.what_could_improve(value);
    }
    if let Some(value) = clearable_text(text.wins.as_ref()) {
        builder = builder.wins(value);
    }
    if let Some(value) = clearable_text(text.learnings.as_ref()) {
        builder = builder.learnings(value);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_noop_update() {
        let text = WeeklyReviewText {
            went_well: None,
            improve: None,
            wins: None,
            learnings: None,
        };
        assert!(build_update(&text).is_err());
    }

    #[test]
    fn flags_map_to_columns() {
        let text = WeeklyReviewText {
            went_well: Some("shipped".into()),
            improve: None,
            wins: None,
            learnings: Some(String::new()),
        };
        let update = build_update(&text).unwrap();
        assert_eq!(update.what_went_well, Some(Some("shipped".into())));
        assert_eq!(update.learnings, Some(Some(String::new())));
        assert_eq!(update.what_could_improve, None);

        let fields = fields(&text);
        assert_eq!(fields.what_went_well.as_deref(), Some("shipped"));
        assert!(fields.wins.is_none());
    }
}
