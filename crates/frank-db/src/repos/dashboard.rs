//! Dashboard counters.

use chrono::{Datelike, NaiveDate};
use frank_core::enums::Table;
use frank_core::views::DashboardStats;

use crate::error::DatabaseError;
use crate::service::PlannerService;

impl PlannerService {
    /// To-do counters for `today` plus the number of annual goals set for
    /// `today`'s year.
    pub async fn dashboard_stats(&self, today: NaiveDate) -> Result<DashboardStats, DatabaseError> {
        let goals_this_year = self.owned().eq("year", today.year());
        let (todos, annual_goals_this_year) = tokio::try_join!(
            self.list_todos(),
            self.db().count(Table::AnnualGoals, &goals_this_year),
        )?;
        Ok(DashboardStats {
            annual_goals_this_year,
            ..DashboardStats::from_todos(&todos, today)
        })
    }
}
