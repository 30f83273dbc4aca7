//! Row-to-record decoding helpers.
//!
//! The table API hands back JSON rows; every repo decodes them into the
//! typed records from `frank-core` through these helpers so decode failures
//! surface as `DatabaseError::Parse` with the table name attached.

use chrono::{SecondsFormat, Utc};
use frank_core::enums::Table;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DatabaseError;

/// Decode one row.
///
/// # Errors
///
/// Returns `DatabaseError::Parse` if the row does not match `T`.
pub fn decode_row<T: DeserializeOwned>(table: Table, row: Value) -> Result<T, DatabaseError> {
    serde_json::from_value(row)
        .map_err(|e| DatabaseError::Parse(format!("{table} row: {e}")))
}

/// Decode every row.
///
/// # Errors
///
/// Returns `DatabaseError::Parse` on the first row that does not match `T`.
pub fn decode_rows<T: DeserializeOwned>(
    table: Table,
    rows: Vec<Value>,
) -> Result<Vec<T>, DatabaseError> {
    rows.into_iter().map(|row| decode_row(table, row)).collect()
}

/// Decode the first row, or `NoResult` when there is none.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` for an empty result, or `Parse`.
pub fn decode_first<T: DeserializeOwned>(
    table: Table,
    rows: Vec<Value>,
) -> Result<T, DatabaseError> {
    let row = rows.into_iter().next().ok_or(DatabaseError::NoResult)?;
    decode_row(table, row)
}

/// Serialize a new-row or patch struct into a JSON object.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn to_row<T: Serialize>(value: &T) -> Result<Value, DatabaseError> {
    serde_json::to_value(value).map_err(|e| DatabaseError::Other(e.into()))
}

/// Current time as the RFC 3339 string stored in `updated_at`.
#[must_use]
pub fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Add `updated_at = now` to a patch object.
pub fn stamp_updated(patch: &mut Value) {
    if let Value::Object(fields) = patch {
        fields.insert("updated_at".into(), Value::String(now_stamp()));
    }
}

/// True when a serialized patch carries no changes.
#[must_use]
pub fn is_empty_patch(patch: &Value) -> bool {
    patch.as_object().is_none_or(serde_json::Map::is_empty)
}
