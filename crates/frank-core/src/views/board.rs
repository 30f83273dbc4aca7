use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::week_of_month;
use crate::entities::{MonthlyGoal, WeeklyPlan};

/// A weekly plan with its monthly goal title and week-of-month number.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeeklyPlanCard {
    #[serde(flatten)]
    pub plan: WeeklyPlan,
    pub month_goal_title: Option<String>,
    pub week_of_month: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeeklyPlanBoard {
    pub plans: Vec<WeeklyPlanCard>,
}

impl WeeklyPlanBoard {
    #[must_use]
    pub fn build(plans: &[WeeklyPlan], monthly: &[MonthlyGoal]) -> Self {
        let plans = plans
            .iter()
            .map(|plan| WeeklyPlanCard {
                month_goal_title: plan.month_goal_id.as_ref().and_then(|gid| {
                    monthly
                        .iter()
                        .find(|g| &g.id == gid)
                        .map(|g| g.title.clone())
                }),
                week_of_month: week_of_month(plan.week_start_date),
                plan: plan.clone(),
            })
            .collect();
        Self { plans }
    }
}
