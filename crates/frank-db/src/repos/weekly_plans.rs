//! Weekly plan repository.

use chrono::{Duration, NaiveDate};
use frank_core::dates;
use frank_core::entities::WeeklyPlan;
use frank_core::enums::{Table, WeekStart};
use frank_core::responses::DeleteResponse;
use frank_core::text;
use frank_core::views::WeeklyPlanBoard;
use serde::Serialize;

use super::normalize_text;
use crate::error::DatabaseError;
use crate::query::{OrderBy, Query};
use crate::service::PlannerService;
use crate::updates::weekly_plan::WeeklyPlanUpdate;

/// Input for a new weekly plan. Missing dates fall back to the current week.
#[derive(Debug, Clone, Default)]
pub struct NewWeeklyPlan {
    pub week_start_date: Option<NaiveDate>,
    pub week_end_date: Option<NaiveDate>,
    pub theme: Option<String>,
    pub focus: Option<String>,
    pub month_goal_id: Option<String>,
}

#[derive(Serialize)]
struct NewWeeklyPlanRow<'a> {
    user_id: &'a str,
    month_goal_id: Option<String>,
    week_start_date: NaiveDate,
    week_end_date: NaiveDate,
    theme: Option<String>,
    focus: Option<String>,
}

/// Fill in whichever week bounds are missing.
///
/// Both missing: the week containing `today`. One missing: six days from
/// the other.
#[must_use]
pub fn resolve_week(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    starts_on: WeekStart,
) -> (NaiveDate, NaiveDate) {
    match (start, end) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, start + Duration::days(6)),
        (None, Some(end)) => (end - Duration::days(6), end),
        (None, None) => dates::default_week(today, starts_on),
    }
}

impl PlannerService {
    pub async fn list_weekly_plans(&self) -> Result<Vec<WeeklyPlan>, DatabaseError> {
        let query = Query::new().order(OrderBy::desc("week_start_date"));
        self.fetch_owned(Table::WeeklyPlans, query).await
    }

    pub async fn get_weekly_plan(&self, id: &str) -> Result<WeeklyPlan, DatabaseError> {
        self.fetch_one(Table::WeeklyPlans, id).await
    }

    pub async fn create_weekly_plan(
        &self,
        new: NewWeeklyPlan,
    ) -> Result<WeeklyPlan, DatabaseError> {
        let (start, end) = resolve_week(
            new.week_start_date,
            new.week_end_date,
            dates::today(),
            self.week_start(),
        );
        dates::validate_week(start, end)?;
        let row = NewWeeklyPlanRow {
            user_id: self.user_id(),
            month_goal_id: text::optional(new.month_goal_id.as_deref()),
            week_start_date: start,
            week_end_date: end,
            theme: text::optional(new.theme.as_deref()),
            focus: text::optional(new.focus.as_deref()),
        };
        self.insert_owned(Table::WeeklyPlans, &row).await
    }

    /// Date changes are checked against the stored bounds they leave in place.
    pub async fn update_weekly_plan(
        &self,
        id: &str,
        mut update: WeeklyPlanUpdate,
    ) -> Result<WeeklyPlan, DatabaseError> {
        if update.week_start_date.is_some() || update.week_end_date.is_some() {
            let current = self.get_weekly_plan(id).await?;
            dates::validate_week(
                update.week_start_date.unwrap_or(current.week_start_date),
                update.week_end_date.unwrap_or(current.week_end_date),
            )?;
        }
        update.theme = normalize_text(update.theme);
        update.focus = normalize_text(update.focus);
        update.month_goal_id = normalize_text(update.month_goal_id);
        self.patch_owned(Table::WeeklyPlans, id, &update).await
    }

    pub async fn delete_weekly_plan(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(Table::WeeklyPlans, id).await
    }

    /// Plans annotated with their monthly goal title and week-of-month.
    pub async fn weekly_plan_board(&self) -> Result<WeeklyPlanBoard, DatabaseError> {
        let (plans, monthly) =
            tokio::try_join!(self.list_weekly_plans(), self.list_monthly_goals())?;
        Ok(WeeklyPlanBoard::build(&plans, &monthly))
    }
}
