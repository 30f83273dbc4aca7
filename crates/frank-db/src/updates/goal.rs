//! Annual and monthly goal update builders.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnualGoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

pub struct AnnualGoalUpdateBuilder(AnnualGoalUpdate);

impl AnnualGoalUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AnnualGoalUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn value_id(mut self, value_id: Option<String>) -> Self {
        self.0.value_id = Some(value_id);
        self
    }

    #[must_use]
    pub const fn year(mut self, year: i32) -> Self {
        self.0.year = Some(year);
        self
    }

    #[must_use]
    pub fn build(self) -> AnnualGoalUpdate {
        self.0
    }
}

impl Default for AnnualGoalUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlyGoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_goal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

pub struct MonthlyGoalUpdateBuilder(MonthlyGoalUpdate);

impl MonthlyGoalUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MonthlyGoalUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn annual_goal_id(mut self, annual_goal_id: impl Into<String>) -> Self {
        self.0.annual_goal_id = Some(annual_goal_id.into());
        self
    }

    #[must_use]
    pub const fn month(mut self, month: u32) -> Self {
        self.0.month = Some(month);
        self
    }

    #[must_use]
    pub const fn year(mut self, year: i32) -> Self {
        self.0.year = Some(year);
        self
    }

    #[must_use]
    pub fn build(self) -> MonthlyGoalUpdate {
        self.0
    }
}

impl Default for MonthlyGoalUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
