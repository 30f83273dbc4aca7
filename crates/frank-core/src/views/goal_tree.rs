use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnnualGoal, MonthlyGoal, Value};

/// An annual goal with its resolved value and monthly children.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnnualGoalNode {
    pub goal: AnnualGoal,
    pub value_title: Option<String>,
    pub monthly: Vec<MonthlyGoal>,
}

/// Annual goals with their monthly breakdown.
///
/// Monthly goals whose annual goal is not in the fetched list land in
/// `orphaned_monthly` instead of being dropped.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GoalTree {
    pub annual: Vec<AnnualGoalNode>,
    pub orphaned_monthly: Vec<MonthlyGoal>,
}

impl GoalTree {
    /// Join by id. Input order is kept for both levels.
    #[must_use]
    pub fn build(values: &[Value], annual: &[AnnualGoal], monthly: &[MonthlyGoal]) -> Self {
        let mut nodes: Vec<AnnualGoalNode> = annual
            .iter()
            .map(|goal| AnnualGoalNode {
                value_title: goal.value_id.as_ref().and_then(|vid| {
                    values
                        .iter()
                        .find(|v| &v.id == vid)
                        .map(|v| v.title.clone())
                }),
                goal: goal.clone(),
                monthly: Vec::new(),
            })
            .collect();

        let mut orphaned_monthly = Vec::new();
        for goal in monthly {
            match nodes
                .iter_mut()
                .find(|n| n.goal.id == goal.annual_goal_id)
            {
                Some(node) => node.monthly.push(goal.clone()),
                None => orphaned_monthly.push(goal.clone()),
            }
        }

        Self {
            annual: nodes,
            orphaned_monthly,
        }
    }
}
