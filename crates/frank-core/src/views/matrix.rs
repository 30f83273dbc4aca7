use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Todo;
use crate::enums::Quadrant;

/// One cell of the urgency/importance matrix.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuadrantCell {
    pub quadrant: Quadrant,
    pub label: String,
    pub todos: Vec<Todo>,
}

/// Open to-dos grouped into the four quadrants, in quadrant order.
///
/// Completed to-dos are left out. Input order is preserved inside each cell.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuadrantMatrix {
    pub cells: Vec<QuadrantCell>,
}

impl QuadrantMatrix {
    #[must_use]
    pub fn build(todos: &[Todo]) -> Self {
        let mut cells: Vec<QuadrantCell> = Quadrant::ALL
            .iter()
            .map(|q| QuadrantCell {
                quadrant: *q,
                label: q.label().to_string(),
                todos: Vec::new(),
            })
            .collect();
        for todo in todos.iter().filter(|t| !t.completed) {
            cells[todo.quadrant.index()].todos.push(todo.clone());
        }
        Self { cells }
    }

    #[must_use]
    pub fn cell(&self, quadrant: Quadrant) -> &QuadrantCell {
        &self.cells[quadrant.index()]
    }
}

/// A to-do annotated for list display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TodoEntry {
    #[serde(flatten)]
    pub todo: Todo,
    pub quadrant_label: String,
    pub overdue: bool,
}

/// Incomplete and completed partitions of the to-do list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TodoListView {
    pub incomplete: Vec<TodoEntry>,
    pub completed: Vec<TodoEntry>,
}

impl TodoListView {
    #[must_use]
    pub fn build(todos: &[Todo], today: NaiveDate) -> Self {
        let (completed, incomplete): (Vec<_>, Vec<_>) = todos
            .iter()
            .map(|todo| TodoEntry {
                quadrant_label: todo.quadrant.label().to_string(),
                overdue: todo.is_overdue(today),
                todo: todo.clone(),
            })
            .partition(|entry| entry.todo.completed);
        Self {
            incomplete,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::{d, todo};
    use pretty_assertions::assert_eq;

    #[test]
    fn matrix_groups_open_todos_by_quadrant() {
        let todos = vec![
            todo("a", Quadrant::ImportantUrgent, None, false),
            todo("b", Quadrant::Neither, None, false),
            todo("c", Quadrant::ImportantUrgent, None, true),
            todo("d", Quadrant::ImportantUrgent, Some("2024-05-01"), false),
        ];
        let matrix = QuadrantMatrix::build(&todos);

        assert_eq!(matrix.cells.len(), 4);
        let urgent: Vec<&str> = matrix
            .cell(Quadrant::ImportantUrgent)
            .todos
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(urgent, vec!["a", "d"]);
        assert!(matrix.cell(Quadrant::ImportantNotUrgent).todos.is_empty());
        assert_eq!(matrix.cell(Quadrant::Neither).todos.len(), 1);
        assert_eq!(matrix.cell(Quadrant::Neither).label, "Neither urgent nor important");
    }

    #[test]
    fn matrix_of_nothing_has_four_empty_cells() {
        let matrix = QuadrantMatrix::build(&[]);
        assert_eq!(matrix.cells.len(), 4);
        assert!(matrix.cells.iter().all(|c| c.todos.is_empty()));
    }

    #[test]
    fn list_view_partitions_and_flags_overdue() {
        let todos = vec![
            todo("late", Quadrant::ImportantUrgent, Some("2024-05-10"), false),
            todo("today", Quadrant::ImportantNotUrgent, Some("2024-05-15"), false),
            todo("done-late", Quadrant::Neither, Some("2024-05-01"), true),
        ];
        let view = TodoListView::build(&todos, d("2024-05-15"));

        assert_eq!(view.incomplete.len(), 2);
        assert_eq!(view.completed.len(), 1);
        assert!(view.incomplete[0].overdue);
        assert!(!view.incomplete[1].overdue);
        assert!(!view.completed[0].overdue);
        assert_eq!(view.incomplete[1].quadrant_label, "Important, not urgent");
    }

    #[test]
    fn entry_serializes_flat() {
        let entry = TodoEntry {
            todo: todo("x", Quadrant::UrgentNotImportant, None, false),
            quadrant_label: Quadrant::UrgentNotImportant.label().into(),
            overdue: false,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "x");
        assert_eq!(json["quadrant"], 3);
        assert_eq!(json["overdue"], false);
    }
}
