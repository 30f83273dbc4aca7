//! Repository modules, one per planner view.
//!
//! Each module adds methods to `PlannerService` via `impl PlannerService`
//! blocks. The shared row plumbing below keeps every table call scoped to
//! the signed-in user.

pub mod dashboard;
pub mod goals;
pub mod reviews;
pub mod todos;
pub mod values;
pub mod weekly_plans;

use frank_core::enums::Table;
use frank_core::responses::DeleteResponse;
use frank_core::text;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DatabaseError;
use crate::helpers::{decode_first, decode_row, decode_rows, is_empty_patch, stamp_updated, to_row};
use crate::query::Query;
use crate::service::PlannerService;

impl PlannerService {
    /// Rows of `table` owned by the current user, in `query` order.
    pub(crate) async fn fetch_owned<T: DeserializeOwned>(
        &self,
        table: Table,
        query: Query,
    ) -> Result<Vec<T>, DatabaseError> {
        let mut scoped = self.owned();
        scoped.filters.extend(query.filters);
        scoped.order = query.order;
        scoped.limit = query.limit;
        let rows = self.db().select(table, &scoped).await?;
        decode_rows(table, rows)
    }

    /// One owned row by id, or `NoResult`.
    pub(crate) async fn fetch_one<T: DeserializeOwned>(
        &self,
        table: Table,
        id: &str,
    ) -> Result<T, DatabaseError> {
        let rows = self.db().select(table, &self.owned_row(id)).await?;
        decode_first(table, rows)
    }

    /// Insert a new-row struct (which must carry `user_id`) and decode the
    /// stored row.
    pub(crate) async fn insert_owned<T: DeserializeOwned, R: Serialize>(
        &self,
        table: Table,
        row: &R,
    ) -> Result<T, DatabaseError> {
        let stored = self.db().insert(table, &to_row(row)?).await?;
        decode_row(table, stored)
    }

    /// PATCH an owned row. An update with no fields returns the row as-is.
    pub(crate) async fn patch_owned<T: DeserializeOwned, U: Serialize>(
        &self,
        table: Table,
        id: &str,
        update: &U,
    ) -> Result<T, DatabaseError> {
        let mut patch = to_row(update)?;
        if is_empty_patch(&patch) {
            return self.fetch_one(table, id).await;
        }
        stamp_updated(&mut patch);
        let rows = self.db().update(table, &self.owned_row(id), &patch).await?;
        decode_first(table, rows)
    }

    pub(crate) async fn delete_owned(
        &self,
        table: Table,
        id: &str,
    ) -> Result<DeleteResponse, DatabaseError> {
        let removed = self.db().delete(table, &self.owned_row(id)).await?;
        tracing::debug!(%table, id, removed, "delete");
        Ok(DeleteResponse {
            table,
            id: id.to_string(),
            deleted: removed > 0,
        })
    }
}

/// Trim a nullable text patch field; blank clears the column.
pub(crate) fn normalize_text(field: Option<Option<String>>) -> Option<Option<String>> {
    field.map(|value| text::optional(value.as_deref()))
}

/// Trim a required title patch field, rejecting blanks.
pub(crate) fn normalize_title(field: Option<String>) -> Result<Option<String>, DatabaseError> {
    field
        .map(|title| text::required("title", &title))
        .transpose()
        .map_err(Into::into)
}
