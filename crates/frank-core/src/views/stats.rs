use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Todo;

/// Dashboard counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_todos: u64,
    pub completed_todos: u64,
    pub due_today: u64,
    pub overdue: u64,
    /// Percentage, rounded half up. `0` when there are no to-dos.
    pub completion_rate: u64,
    pub annual_goals_this_year: u64,
    pub year: i32,
}

impl DashboardStats {
    /// Counters derived from the full to-do list.
    ///
    /// `annual_goals_this_year` is left at zero; the caller fills it from a
    /// separate count.
    #[must_use]
    pub fn from_todos(todos: &[Todo], today: NaiveDate) -> Self {
        let total_todos = todos.len() as u64;
        let completed_todos = todos.iter().filter(|t| t.completed).count() as u64;
        let due_today = todos.iter().filter(|t| t.is_due_on(today)).count() as u64;
        let overdue = todos.iter().filter(|t| t.is_overdue(today)).count() as u64;
        Self {
            total_todos,
            completed_todos,
            due_today,
            overdue,
            completion_rate: completion_rate(completed_todos, total_todos),
            annual_goals_this_year: 0,
            year: today.year(),
        }
    }
}

/// `round(completed / total * 100)`, or `0` when `total` is zero.
#[must_use]
pub const fn completion_rate(completed: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (completed * 100 + total / 2) / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Quadrant;
    use crate::views::fixtures::{d, todo};
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(0, 5, 0)]
    #[case(5, 5, 100)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 13)] // 12.5 rounds up
    #[case(1, 200, 1)] // 0.5 rounds up
    fn rate(#[case] completed: u64, #[case] total: u64, #[case] expected: u64) {
        assert_eq!(completion_rate(completed, total), expected);
    }

    #[test]
    fn counts_from_todos() {
        let today = d("2024-05-15");
        let todos = vec![
            todo("a", Quadrant::ImportantUrgent, Some("2024-05-15"), false),
            todo("b", Quadrant::ImportantUrgent, Some("2024-05-15"), true),
            todo("c", Quadrant::Neither, Some("2024-05-01"), false),
            todo("d", Quadrant::Neither, None, true),
        ];

        let stats = DashboardStats::from_todos(&todos, today);

        assert_eq!(stats.total_todos, 4);
        assert_eq!(stats.completed_todos, 2);
        assert_eq!(stats.due_today, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 50);
        assert_eq!(stats.year, 2024);
    }

    #[test]
    fn empty_list_is_all_zero() {
        let stats = DashboardStats::from_todos(&[], d("2024-05-15"));
        assert_eq!(stats.total_todos, 0);
        assert_eq!(stats.completion_rate, 0);
    }
}
