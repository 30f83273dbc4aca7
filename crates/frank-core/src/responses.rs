//! CLI response types returned as JSON by `frank` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Value;
use crate::enums::Table;

/// Response from any `frank <entity> delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub table: Table,
    pub id: String,
    pub deleted: bool,
}

/// Response from `frank value move`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MoveValueResponse {
    pub moved: Value,
    /// Rows whose priority changed, including `moved` when its own changed.
    pub renumbered: u32,
    pub values: Vec<Value>,
}

/// Response from `frank auth signup`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignUpResponse {
    pub user_id: Option<String>,
    pub email: String,
    pub confirmation_required: bool,
    pub message: String,
}

/// Response from `frank auth status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub token_source: Option<String>,
    pub expires_at: Option<i64>,
    pub expired: bool,
}
