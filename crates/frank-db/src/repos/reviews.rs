//! Weekly and daily review repository.

use chrono::NaiveDate;
use frank_core::dates;
use frank_core::entities::{DailyReview, WeeklyReview};
use frank_core::enums::{ReviewKind, Table};
use frank_core::responses::DeleteResponse;
use frank_core::text;
use serde::Serialize;

use super::normalize_text;
use crate::error::DatabaseError;
use crate::query::{OrderBy, Query};
use crate::service::PlannerService;
use crate::updates::review::{DailyReviewUpdate, WeeklyReviewUpdate};

/// Reflection text for a weekly review.
#[derive(Debug, Clone, Default)]
pub struct WeeklyReviewFields {
    pub what_went_well: Option<String>,
    pub what_could_improve: Option<String>,
    pub wins: Option<String>,
    pub learnings: Option<String>,
}

/// Reflection text for a daily review.
#[derive(Debug, Clone, Default)]
pub struct DailyReviewFields {
    pub gratitude: Option<String>,
    pub wins: Option<String>,
    pub improvements: Option<String>,
    pub tomorrow_focus: Option<String>,
}

#[derive(Serialize)]
struct NewWeeklyReviewRow<'a> {
    user_id: &'a str,
    weekly_plan_id: String,
    what_went_well: Option<String>,
    what_could_improve: Option<String>,
    wins: Option<String>,
    learnings: Option<String>,
}

#[derive(Serialize)]
struct NewDailyReviewRow<'a> {
    user_id: &'a str,
    review_date: NaiveDate,
    gratitude: Option<String>,
    wins: Option<String>,
    improvements: Option<String>,
    tomorrow_focus: Option<String>,
}

impl PlannerService {
    pub async fn list_weekly_reviews(&self) -> Result<Vec<WeeklyReview>, DatabaseError> {
        let query = Query::new().order(OrderBy::desc("created_at"));
        self.fetch_owned(Table::WeeklyReviews, query).await
    }

    pub async fn list_daily_reviews(&self) -> Result<Vec<DailyReview>, DatabaseError> {
        let query = Query::new().order(OrderBy::desc("review_date"));
        self.fetch_owned(Table::DailyReviews, query).await
    }

    pub async fn create_weekly_review(
        &self,
        weekly_plan_id: &str,
        fields: WeeklyReviewFields,
    ) -> Result<WeeklyReview, DatabaseError> {
        let row = NewWeeklyReviewRow {
            user_id: self.user_id(),
            weekly_plan_id: text::required("weekly plan id", weekly_plan_id)?,
            what_went_well: text::optional(fields.what_went_well.as_deref()),
            what_could_improve: text::optional(fields.what_could_improve.as_deref()),
            wins: text::optional(fields.wins.as_deref()),
            learnings: text::optional(fields.learnings.as_deref()),
        };
        self.insert_owned(Table::WeeklyReviews, &row).await
    }

    /// `review_date` defaults to today.
    pub async fn create_daily_review(
        &self,
        review_date: Option<NaiveDate>,
        fields: DailyReviewFields,
    ) -> Result<DailyReview, DatabaseError> {
        let row = NewDailyReviewRow {
            user_id: self.user_id(),
            review_date: review_date.unwrap_or_else(dates::today),
            gratitude: text::optional(fields.gratitude.as_deref()),
            wins: text::optional(fields.wins.as_deref()),
            improvements: text::optional(fields.improvements.as_deref()),
            tomorrow_focus: text::optional(fields.tomorrow_focus.as_deref()),
        };
        self.insert_owned(Table::DailyReviews, &row).await
    }

    pub async fn update_weekly_review(
        &self,
        id: &str,
        update: WeeklyReviewUpdate,
    ) -> Result<WeeklyReview, DatabaseError> {
        let update = WeeklyReviewUpdate {
            what_went_well: normalize_text(update.what_went_well),
            what_could_improve: normalize_text(update.what_could_improve),
            wins: normalize_text(update.wins),
            learnings: normalize_text(update.learnings),
        };
        self.patch_owned(Table::WeeklyReviews, id, &update).await
    }

    pub async fn update_daily_review(
        &self,
        id: &str,
        update: DailyReviewUpdate,
    ) -> Result<DailyReview, DatabaseError> {
        let update = DailyReviewUpdate {
            gratitude: normalize_text(update.gratitude),
            wins: normalize_text(update.wins),
            improvements: normalize_text(update.improvements),
            tomorrow_focus: normalize_text(update.tomorrow_focus),
        };
        self.patch_owned(Table::DailyReviews, id, &update).await
    }

    pub async fn delete_weekly_review(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(Table::WeeklyReviews, id).await
    }

    pub async fn delete_daily_review(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(Table::DailyReviews, id).await
    }

    pub async fn delete_review(
        &self,
        kind: ReviewKind,
        id: &str,
    ) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(kind.table(), id).await
    }
}
