//! Values repository: CRUD plus priority renumbering.

use frank_core::entities::Value;
use frank_core::enums::Table;
use frank_core::responses::{DeleteResponse, MoveValueResponse};
use frank_core::text;
use serde::Serialize;

use super::{normalize_text, normalize_title};
use crate::error::DatabaseError;
use crate::query::{OrderBy, Query};
use crate::service::PlannerService;
use crate::updates::value::{ValueUpdate, ValueUpdateBuilder};

#[derive(Serialize)]
struct NewValueRow<'a> {
    user_id: &'a str,
    title: String,
    description: Option<String>,
    priority: i32,
}

impl PlannerService {
    pub async fn list_values(&self) -> Result<Vec<Value>, DatabaseError> {
        self.fetch_owned(Table::Values, Query::new().order(OrderBy::asc("priority")))
            .await
    }

    pub async fn get_value(&self, id: &str) -> Result<Value, DatabaseError> {
        self.fetch_one(Table::Values, id).await
    }

    /// New values go to the bottom of the list (`priority = count + 1`).
    pub async fn create_value(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Value, DatabaseError> {
        let title = text::required("title", title)?;
        let existing = self.db().count(Table::Values, &self.owned()).await?;
        let priority = i32::try_from(existing + 1)
            .map_err(|_| DatabaseError::InvalidState(format!("{existing} values")))?;
        let row = NewValueRow {
            user_id: self.user_id(),
            title,
            description: text::optional(description),
            priority,
        };
        self.insert_owned(Table::Values, &row).await
    }

    pub async fn update_value(
        &self,
        id: &str,
        mut update: ValueUpdate,
    ) -> Result<Value, DatabaseError> {
        update.title = normalize_title(update.title)?;
        update.description = normalize_text(update.description);
        self.patch_owned(Table::Values, id, &update).await
    }

    pub async fn delete_value(&self, id: &str) -> Result<DeleteResponse, DatabaseError> {
        self.delete_owned(Table::Values, id).await
    }

    /// Place value `id` at 1-based `position` (clamped to the list) and
    /// renumber every priority to `1..=n`. Only rows whose priority changes
    /// are written.
    pub async fn move_value(
        &self,
        id: &str,
        position: u32,
    ) -> Result<MoveValueResponse, DatabaseError> {
        let mut values = self.list_values().await?;
        let from = values
            .iter()
            .position(|v| v.id == id)
            .ok_or(DatabaseError::NoResult)?;
        let moving = values.remove(from);
        let target = usize::try_from(position.max(1) - 1)
            .map_or(values.len(), |p| p.min(values.len()));
        values.insert(target, moving);

        let mut renumbered = 0;
        let mut reordered = Vec::with_capacity(values.len());
        for (value, priority) in values.into_iter().zip(1..) {
            if value.priority == priority {
                reordered.push(value);
                continue;
            }
            let update = ValueUpdateBuilder::new().priority(priority).build();
            reordered.push(self.patch_owned(Table::Values, &value.id, &update).await?);
            renumbered += 1;
        }
        tracing::debug!(id, position, renumbered, "moved value");

        let moved = reordered[target].clone();
        Ok(MoveValueResponse {
            moved,
            renumbered,
            values: reordered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{insert_foreign, test_service};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn titles(values: &[Value]) -> Vec<&str> {
        values.iter().map(|v| v.title.as_str()).collect()
    }

    #[tokio::test]
    async fn create_value_appends_priority() {
        let svc = test_service();
        let first = svc.create_value("  Health ", Some("  body and mind ")).await.unwrap();
        let second = svc.create_value("Family", Some("   ")).await.unwrap();

        assert_eq!(first.title, "Health");
        assert_eq!(first.description.as_deref(), Some("body and mind"));
        assert_eq!(first.priority, 1);
        assert_eq!(second.priority, 2);
        assert_eq!(second.description, None);
    }

    #[tokio::test]
    async fn create_value_rejects_blank_title() {
        let svc = test_service();
        let result = svc.create_value("   ", None).await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
        assert!(svc.list_values().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_values_is_scoped_and_ordered() {
        let svc = test_service();
        insert_foreign(&svc, Table::Values, json!({"title": "Not mine", "priority": 0})).await;
        svc.create_value("A", None).await.unwrap();
        svc.create_value("B", None).await.unwrap();

        let values = svc.list_values().await.unwrap();
        assert_eq!(titles(&values), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn update_value_partial() {
        let svc = test_service();
        let value = svc.create_value("Health", Some("old")).await.unwrap();

        let update = ValueUpdateBuilder::new().description(None).build();
        let updated = svc.update_value(&value.id, update).await.unwrap();
        assert_eq!(updated.title, "Health");
        assert_eq!(updated.description, None);
        assert!(updated.updated_at >= value.updated_at);
    }

    #[tokio::test]
    async fn empty_update_returns_current_row() {
        let svc = test_service();
        let value = svc.create_value("Health", None).await.unwrap();
        let same = svc
            .update_value(&value.id, ValueUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(same, value);
    }

    #[tokio::test]
    async fn update_value_of_other_user_is_no_result() {
        let svc = test_service();
        let foreign = insert_foreign(&svc, Table::Values, json!({"title": "x", "priority": 1})).await;
        let update = ValueUpdateBuilder::new().title("mine now").build();
        let result = svc.update_value(&foreign, update).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn delete_value_reports_outcome() {
        let svc = test_service();
        let value = svc.create_value("Health", None).await.unwrap();

        let deleted = svc.delete_value(&value.id).await.unwrap();
        assert!(deleted.deleted);
        assert_eq!(deleted.table, Table::Values);

        let again = svc.delete_value(&value.id).await.unwrap();
        assert!(!again.deleted);
        assert!(matches!(svc.get_value(&value.id).await, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn move_value_renumbers_changed_rows_only() {
        let svc = test_service();
        for title in ["A", "B", "C", "D"] {
            svc.create_value(title, None).await.unwrap();
        }
        let c = svc.list_values().await.unwrap()[2].clone();

        let moved = svc.move_value(&c.id, 1).await.unwrap();
        assert_eq!(moved.moved.title, "C");
        assert_eq!(moved.moved.priority, 1);
        // C, A, B change; D keeps priority 4.
        assert_eq!(moved.renumbered, 3);
        assert_eq!(titles(&moved.values), vec!["C", "A", "B", "D"]);
        assert_eq!(titles(&svc.list_values().await.unwrap()), vec!["C", "A", "B", "D"]);
    }

    #[tokio::test]
    async fn move_value_clamps_position() {
        let svc = test_service();
        for title in ["A", "B", "C"] {
            svc.create_value(title, None).await.unwrap();
        }
        let a = svc.list_values().await.unwrap()[0].clone();

        let moved = svc.move_value(&a.id, 99).await.unwrap();
        assert_eq!(titles(&moved.values), vec!["B", "C", "A"]);
        assert_eq!(moved.moved.priority, 3);

        let back = svc.move_value(&a.id, 0).await.unwrap();
        assert_eq!(titles(&back.values), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn move_unknown_value_is_no_result() {
        let svc = test_service();
        assert!(matches!(
            svc.move_value("missing", 1).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
