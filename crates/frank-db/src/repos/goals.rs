//! Annual and monthly goal repository.

use chrono::Datelike;
use frank_core::dates;
use frank_core::entities::{AnnualGoal, MonthlyGoal};
use frank_core::enums::{GoalKind, Table};
use frank_core::responses::DeleteResponse;
use frank_core::text;
use frank_core::views::GoalTree;
use serde::Serialize;

use super::{normalize_text, normalize_title};
use crate::error::DatabaseError;
use crate::query::{OrderBy, Query};
use crate::service::PlannerService;
use crate::updates::goal::{AnnualGoalUpdate, MonthlyGoalUpdate};

#[derive(Serialize)]
struct NewAnnualGoalRow<'a> {
    user_id: &'a str,
    value_id: Option<String>,
    title: String,
    description: Option<String>,
    year: i32,
}

#[derive(Serialize)]
struct NewMonthlyGoalRow<'a> {
    user_id: &'a str,
    annual_goal_id: String,
    title: String,
    description: Option<String>,
    month: u32,
    year: i32,
}

impl PlannerService {
    pub async fn list_annual_goals(&self) -> Result<Vec<AnnualGoal>, DatabaseError> {
        self.fetch_owned(Table::AnnualGoals, Query::new().order(OrderBy::desc("year")))
            .await
    }

    pub async fn list_monthly_goals(&self) -> Result<Vec<MonthlyGoal>, DatabaseError> {
        let query = Query::new()
            .order(OrderBy::desc("year"))
            .order(OrderBy::desc("month"));
        self.fetch_owned(Table::MonthlyGoals, query).await
    }

    pub async fn get_annual_goal(&self, id: &str) -> Result<AnnualGoal, DatabaseError> {
        self.fetch_one(Table::AnnualGoals, id).await
    }

    pub async fn get_monthly_goal(&self, id: &str) -> Result<MonthlyGoal, DatabaseError> {
        self.fetch_one(Table::MonthlyGoals, id).await
    }

    /// `year` defaults to the current calendar year.
    pub async fn create_annual_goal(
        &self,
        title: &str,
        description: Option<&str>,
        value_id: Option<&str>,
        year: Option<i32>,
    ) -> Result<AnnualGoal, DatabaseError> {
        let row = NewAnnualGoalRow {
            user_id: self.user_id(),
            value_id: text::optional(value_id),
            title: text::required("title", title)?,
            description: text::optional(description),
            year: year.unwrap_or_else(|| dates::today().year()),
        };
        self.insert_owned(Table::AnnualGoals, &row).await
    }

    pub async fn create_monthly_goal(
        &self,
        annual_goal_id: &str,
        title: &str,
        description: Option<&str>,
        month: u32,
        year: Option<i32>,
    ) -> Result<MonthlyGoal, DatabaseError> {
        dates::validate_month(month)?;
        let row = NewMonthlyGoalRow {
            user_id: self.user_id(),
            annual_goal_id: text::required("annual goal id", annual_goal_id)?,
            title: text::required("title", title)?,
            description: text::optional(description),
            month,
            year: year.unwrap_or_else(|| dates::today().year()),
        };
        self.insert_owned(Table::MonthlyGoals, &row).await
    }

    pub async fn update_annual_goal(
        &self,
        id: &str,
        mut update: AnnualGoalUpdate,
    ) -> Result<AnnualGoal, DatabaseError> {
        update.title = normalize_title(update.title)?;
        update.description = normalize_text(update.description);
        update.value_id = normalize_text(update.value_id);
        self.patch_owned(Table::AnnualGoals, id, &update).await
    }

    pub async fn update_monthly_goal(
        &self,
        id: &str,
        mut update: MonthlyGoalUpdate,
    ) -> Result<MonthlyGoal, DatabaseError> {
        if let Some(month) = update.month {
            dates::validate_month(month)?;
        }
        update.title = normalize_title(update.title)?;
        update.description = normalize_text(update.description);
        update.annual_goal_id = update
            .annual_goal_id
            .map(|gid| text::required("annual goal id", &gid))
            .transpose()?;
        self.patch_owned(Table::MonthlyGoals, id, &update).await
    }

    pub async fn delete_annual_goal(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(Table::AnnualGoals, id).await
    }

    pub async fn delete_monthly_goal(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(Table::MonthlyGoals, id).await
    }

    pub async fn delete_goal(
        &self,
        kind: GoalKind,
        id: &str,
    ) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(kind.table(), id).await
    }

    /// Values, annual goals, and monthly goals fetched concurrently and
    /// joined into a tree.
    pub async fn goal_tree(&self) -> Result<GoalTree, DatabaseError> {
        let (values, annual, monthly) = tokio::try_join!(
            self.list_values(),
            self.list_annual_goals(),
            self.list_monthly_goals(),
        )?;
        Ok(GoalTree::build(&values, &annual, &monthly))
    }
}
