//! # frank-db
//!
//! Table API operations for the frank planner.
//!
//! Every read and write is a pass-through call to the hosted table API
//! (`PlannerDb::open_remote`). `PlannerDb::open_memory` provides the same
//! surface in-process for repository tests. `PlannerService` scopes all
//! calls to the signed-in user and hosts one repository module per view.

pub mod error;
pub mod helpers;
pub mod memory;
pub mod query;
pub mod repos;
pub mod rest;
pub mod retry;
pub mod service;
pub mod updates;

mod test_support;

use std::time::Duration;

use error::DatabaseError;
use frank_core::enums::Table;
use memory::MemoryStore;
use query::Query;
use rest::RestClient;
use serde_json::Value;

pub use service::PlannerService;

/// Central table handle for all planner operations.
#[derive(Debug)]
pub enum PlannerDb {
    /// The hosted table API.
    Rest(RestClient),
    /// In-process tables.
    Memory(MemoryStore),
}

impl PlannerDb {
    /// Open a handle to the hosted table API at `rest_url` (`{url}/rest/v1`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Http` if the HTTP client cannot be constructed.
    pub fn open_remote(
        rest_url: &str,
        anon_key: &str,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        Ok(Self::Rest(RestClient::new(
            rest_url,
            anon_key,
            access_token,
            timeout,
        )?))
    }

    /// Open an empty in-process store.
    #[must_use]
    pub fn open_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Rest(_))
    }

    /// Rows of `table` matching `query`, in query order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the request fails.
    pub async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, DatabaseError> {
        match self {
            Self::Rest(client) => client.select(table, query).await,
            Self::Memory(store) => store.select(table, query),
        }
    }

    /// Insert one row and return it as stored (with id and timestamps).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the request fails or nothing comes back.
    pub async fn insert(&self, table: Table, row: &Value) -> Result<Value, DatabaseError> {
        tracing::debug!(%table, "insert");
        match self {
            Self::Rest(client) => client.insert(table, row).await,
            Self::Memory(store) => store.insert(table, row),
        }
    }

    /// Apply `patch` to every row matching `query`; returns the updated rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the request fails.
    pub async fn update(
        &self,
        table: Table,
        query: &Query,
        patch: &Value,
    ) -> Result<Vec<Value>, DatabaseError> {
        tracing::debug!(%table, "update");
        match self {
            Self::Rest(client) => client.update(table, query, patch).await,
            Self::Memory(store) => store.update(table, query, patch),
        }
    }

    /// Delete every row matching `query`; returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the request fails.
    pub async fn delete(&self, table: Table, query: &Query) -> Result<u64, DatabaseError> {
        tracing::debug!(%table, "delete");
        match self {
            Self::Rest(client) => client.delete(table, query).await,
            Self::Memory(store) => store.delete(table, query),
        }
    }

    /// Number of rows matching `query` (order and limit are ignored).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the request fails.
    pub async fn count(&self, table: Table, query: &Query) -> Result<u64, DatabaseError> {
        let query = Query {
            filters: query.filters.clone(),
            ..Query::default()
        };
        match self {
            Self::Rest(client) => client.count(table, &query).await,
            Self::Memory(store) => store.count(table, &query),
        }
    }
}
