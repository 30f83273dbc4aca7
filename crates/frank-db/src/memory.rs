//! In-process table store with the same CRUD surface as the REST handle.
//!
//! Backs repository tests. Generates UUID v4 ids and strictly
//! increasing `created_at`/`updated_at` stamps; no row-level security, no
//! foreign keys.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use frank_core::enums::Table;
use serde_json::{Map, Value};

use crate::error::DatabaseError;
use crate::query::Query;

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    tables: HashMap<Table, Vec<Value>>,
    last_stamp: Option<DateTime<Utc>>,
}

impl Inner {
    /// Now, or one microsecond past the previous stamp if the clock has not moved.
    fn stamp(&mut self) -> String {
        let mut now = Utc::now();
        if let Some(last) = self.last_stamp {
            if now <= last {
                now = last + TimeDelta::microseconds(1);
            }
        }
        self.last_stamp = Some(now);
        now.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, DatabaseError> {
        self.inner
            .lock()
            .map_err(|_| DatabaseError::InvalidState("in-memory table lock poisoned".into()))
    }

    pub fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, DatabaseError> {
        let inner = self.lock()?;
        Ok(inner
            .tables
            .get(&table)
            .map_or_else(Vec::new, |rows| query.apply(rows)))
    }

    pub fn insert(&self, table: Table, row: &Value) -> Result<Value, DatabaseError> {
        let Value::Object(fields) = row else {
            return Err(DatabaseError::Validation(format!(
                "insert into {table} expects a JSON object"
            )));
        };
        let mut inner = self.lock()?;
        let stamp = inner.stamp();
        let mut record: Map<String, Value> = fields.clone();
        if !record.contains_key("id") {
            record.insert("id".into(), Value::String(new_uuid()));
        }
        record
            .entry("created_at")
            .or_insert_with(|| Value::String(stamp.clone()));
        record
            .entry("updated_at")
            .or_insert_with(|| Value::String(stamp));
        let record = Value::Object(record);
        inner.tables.entry(table).or_default().push(record.clone());
        Ok(record)
    }

    pub fn update(
        &self,
        table: Table,
        query: &Query,
        patch: &Value,
    ) -> Result<Vec<Value>, DatabaseError> {
        let Value::Object(changes) = patch else {
            return Err(DatabaseError::Validation(format!(
                "update of {table} expects a JSON object"
            )));
        };
        let mut inner = self.lock()?;
        let Some(rows) = inner.tables.get_mut(&table) else {
            return Ok(Vec::new());
        };
        let mut updated = Vec::new();
        for row in rows.iter_mut().filter(|r| query.matches(r)) {
            if let Value::Object(fields) = row {
                for (key, value) in changes {
                    fields.insert(key.clone(), value.clone());
                }
            }
            updated.push(row.clone());
        }
        Ok(updated)
    }

    pub fn delete(&self, table: Table, query: &Query) -> Result<u64, DatabaseError> {
        let mut inner = self.lock()?;
        let Some(rows) = inner.tables.get_mut(&table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|r| !query.matches(r));
        Ok((before - rows.len()) as u64)
    }

    pub fn count(&self, table: Table, query: &Query) -> Result<u64, DatabaseError> {
        let inner = self.lock()?;
        Ok(inner.tables.get(&table).map_or(0, |rows| {
            rows.iter().filter(|r| query.matches(r)).count() as u64
        }))
    }
}

/// Random RFC 4122 version 4 UUID.
fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::OrderBy;
    use serde_json::json;

    #[test]
    fn uuid_shape() {
        let id = new_uuid();
        assert_eq!(id.len(), 36);
        assert_eq!(&id[14..15], "4");
        assert!(matches!(&id[19..20], "8" | "9" | "a" | "b"));
        assert_ne!(id, new_uuid());
    }

    #[test]
    fn insert_fills_id_and_strictly_increasing_stamps() {
        let store = MemoryStore::new();
        let a = store.insert(Table::Values, &json!({"title": "a"})).unwrap();
        let b = store.insert(Table::Values, &json!({"title": "b"})).unwrap();
        assert!(a["id"].is_string());
        assert!(a["created_at"].as_str().unwrap() < b["created_at"].as_str().unwrap());
        assert_eq!(a["created_at"], a["updated_at"]);
    }

    #[test]
    fn update_merges_patch_into_matching_rows() {
        let store = MemoryStore::new();
        let row = store
            .insert(Table::Todos, &json!({"title": "t", "completed": false, "user_id": "u1"}))
            .unwrap();
        let id = row["id"].as_str().unwrap();

        let updated = store
            .update(
                Table::Todos,
                &Query::new().eq("id", id).eq("user_id", "u1"),
                &json!({"completed": true}),
            )
            .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0]["completed"], true);
        assert_eq!(updated[0]["title"], "t");

        let none = store
            .update(
                Table::Todos,
                &Query::new().eq("id", id).eq("user_id", "someone-else"),
                &json!({"completed": false}),
            )
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn delete_and_count() {
        let store = MemoryStore::new();
        for year in [2023, 2024, 2024] {
            store
                .insert(Table::AnnualGoals, &json!({"year": year, "user_id": "u1"}))
                .unwrap();
        }
        let this_year = Query::new().eq("user_id", "u1").eq("year", 2024);
        assert_eq!(store.count(Table::AnnualGoals, &this_year).unwrap(), 2);
        assert_eq!(store.delete(Table::AnnualGoals, &this_year).unwrap(), 2);
        assert_eq!(store.count(Table::AnnualGoals, &Query::new()).unwrap(), 1);
        assert_eq!(store.delete(Table::Todos, &Query::new()).unwrap(), 0);
    }

    #[test]
    fn select_orders_by_insertion_stamp() {
        let store = MemoryStore::new();
        for title in ["first", "second", "third"] {
            store.insert(Table::WeeklyReviews, &json!({"title": title})).unwrap();
        }
        let rows = store
            .select(
                Table::WeeklyReviews,
                &Query::new().order(OrderBy::desc("created_at")),
            )
            .unwrap();
        let titles: Vec<&str> = rows.iter().map(|r| r["title"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn non_object_rows_are_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.insert(Table::Values, &json!([1, 2])),
            Err(DatabaseError::Validation(_))
        ));
    }
}
