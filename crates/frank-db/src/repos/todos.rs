//! To-do repository, quadrant matrix, and list partitions.

use chrono::NaiveDate;
use frank_core::entities::Todo;
use frank_core::enums::{Quadrant, Table};
use frank_core::responses::DeleteResponse;
use frank_core::text;
use frank_core::views::{QuadrantMatrix, TodoListView};
use serde::Serialize;

use super::{normalize_text, normalize_title};
use crate::error::DatabaseError;
use crate::query::{OrderBy, Query};
use crate::service::PlannerService;
use crate::updates::todo::{TodoUpdate, TodoUpdateBuilder};

/// Input for a new to-do.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub title: String,
    pub content: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub quadrant: Quadrant,
    pub weekly_plan_id: Option<String>,
}

#[derive(Serialize)]
struct NewTodoRow<'a> {
    user_id: &'a str,
    weekly_plan_id: Option<String>,
    title: String,
    content: Option<String>,
    due_date: Option<NaiveDate>,
    quadrant: Quadrant,
    completed: bool,
}

impl PlannerService {
    /// Soonest due first, undated last, newest first within a day.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, DatabaseError> {
        let query = Query::new()
            .order(OrderBy::asc("due_date").nulls_last())
            .order(OrderBy::desc("created_at"));
        self.fetch_owned(Table::Todos, query).await
    }

    pub async fn get_todo(&self, id: &str) -> Result<Todo, DatabaseError> {
        self.fetch_one(Table::Todos, id).await
    }

    pub async fn create_todo(&self, new: NewTodo) -> Result<Todo, DatabaseError> {
        let row = NewTodoRow {
            user_id: self.user_id(),
            weekly_plan_id: text::optional(new.weekly_plan_id.as_deref()),
            title: text::required("title", &new.title)?,
            content: text::optional(new.content.as_deref()),
            due_date: new.due_date,
            quadrant: new.quadrant,
            completed: false,
        };
        self.insert_owned(Table::Todos, &row).await
    }

    pub async fn update_todo(
        &self,
        id: &str,
        mut update: TodoUpdate,
    ) -> Result<Todo, DatabaseError> {
        update.title = normalize_title(update.title)?;
        update.content = normalize_text(update.content);
        update.weekly_plan_id = normalize_text(update.weekly_plan_id);
        self.patch_owned(Table::Todos, id, &update).await
    }

    /// Flip `completed`.
    pub async fn toggle_todo(&self, id: &str) -> Result<Todo, DatabaseError> {
        let current = self.get_todo(id).await?;
        let update = TodoUpdateBuilder::new()
            .completed(!current.completed)
            .build();
        self.patch_owned(Table::Todos, id, &update).await
    }

    pub async fn delete_todo(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(Table::Todos, id).await
    }

    pub async fn quadrant_matrix(&self) -> Result<QuadrantMatrix, DatabaseError> {
        Ok(QuadrantMatrix::build(&self.list_todos().await?))
    }

    pub async fn todo_list_view(&self, today: NaiveDate) -> Result<TodoListView, DatabaseError> {
        Ok(TodoListView::build(&self.list_todos().await?, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{date, insert_foreign, test_service};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            ..NewTodo::default()
        }
    }

    #[tokio::test]
    async fn create_todo_defaults() {
        let svc = test_service();
        let todo = svc
            .create_todo(NewTodo {
                content: Some("  ".into()),
                ..new_todo(" Call mom ")
            })
            .await
            .unwrap();
        assert_eq!(todo.title, "Call mom");
        assert_eq!(todo.content, None);
        assert_eq!(todo.quadrant, Quadrant::ImportantNotUrgent);
        assert!(!todo.completed);
        assert_eq!(todo.user_id, svc.user_id());
    }

    #[tokio::test]
    async fn create_todo_requires_title() {
        let svc = test_service();
        assert!(matches!(
            svc.create_todo(new_todo("")).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn list_orders_by_due_date_then_newest() {
        let svc = test_service();
        svc.create_todo(new_todo("undated old")).await.unwrap();
        svc.create_todo(NewTodo {
            due_date: Some(date("2024-06-10")),
            ..new_todo("later")
        })
        .await
        .unwrap();
        svc.create_todo(new_todo("undated new")).await.unwrap();
        svc.create_todo(NewTodo {
            due_date: Some(date("2024-06-01")),
            ..new_todo("sooner")
        })
        .await
        .unwrap();
        insert_foreign(&svc, Table::Todos, json!({"title": "foreign", "completed": false})).await;

        let titles: Vec<String> = svc
            .list_todos()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["sooner", "later", "undated new", "undated old"]);
    }

    #[tokio::test]
    async fn toggle_flips_completed() {
        let svc = test_service();
        let todo = svc.create_todo(new_todo("t")).await.unwrap();

        let done = svc.toggle_todo(&todo.id).await.unwrap();
        assert!(done.completed);
        assert!(done.updated_at >= todo.updated_at);

        let reopened = svc.toggle_todo(&todo.id).await.unwrap();
        assert!(!reopened.completed);
    }

    #[tokio::test]
    async fn toggle_missing_is_no_result() {
        let svc = test_service();
        assert!(matches!(svc.toggle_todo("nope").await, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn update_todo_moves_quadrant_and_clears_due() {
        let svc = test_service();
        let todo = svc
            .create_todo(NewTodo {
                due_date: Some(date("2024-06-01")),
                ..new_todo("t")
            })
            .await
            .unwrap();

        let update = TodoUpdateBuilder::new()
            .quadrant(Quadrant::ImportantUrgent)
            .due_date(None)
            .build();
        let updated = svc.update_todo(&todo.id, update).await.unwrap();
        assert_eq!(updated.quadrant, Quadrant::ImportantUrgent);
        assert_eq!(updated.due_date, None);
    }

    #[tokio::test]
    async fn matrix_skips_completed() {
        let svc = test_service();
        let done = svc
            .create_todo(NewTodo {
                quadrant: Quadrant::Neither,
                ..new_todo("done")
            })
            .await
            .unwrap();
        svc.toggle_todo(&done.id).await.unwrap();
        svc.create_todo(NewTodo {
            quadrant: Quadrant::Neither,
            ..new_todo("open")
        })
        .await
        .unwrap();

        let matrix = svc.quadrant_matrix().await.unwrap();
        let cell = matrix.cell(Quadrant::Neither);
        assert_eq!(cell.todos.len(), 1);
        assert_eq!(cell.todos[0].title, "open");
        assert!(matrix.cell(Quadrant::ImportantUrgent).todos.is_empty());
    }

    #[tokio::test]
    async fn list_view_partitions_and_flags_overdue() {
        let svc = test_service();
        svc.create_todo(NewTodo {
            due_date: Some(date("2024-06-01")),
            ..new_todo("late")
        })
        .await
        .unwrap();
        let finished = svc
            .create_todo(NewTodo {
                due_date: Some(date("2024-05-01")),
                ..new_todo("finished")
            })
            .await
            .unwrap();
        svc.toggle_todo(&finished.id).await.unwrap();

        let view = svc.todo_list_view(date("2024-06-05")).await.unwrap();
        assert_eq!(view.incomplete.len(), 1);
        assert!(view.incomplete[0].overdue);
        assert_eq!(view.completed.len(), 1);
        assert!(!view.completed[0].overdue);
    }

    #[tokio::test]
    async fn delete_todo() {
        let svc = test_service();
        let todo = svc.create_todo(new_todo("t")).await.unwrap();
        assert!(svc.delete_todo(&todo.id).await.unwrap().deleted);
        assert!(svc.list_todos().await.unwrap().is_empty());
    }
}
