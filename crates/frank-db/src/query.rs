//! Row filters, ordering, and limits for table reads and writes.
//!
//! A [`Query`] encodes to PostgREST query parameters for the REST handle and
//! is evaluated directly against JSON rows by the in-memory handle, so both
//! handles agree on which rows match and in what order they come back.

use std::cmp::Ordering;

use serde_json::Value;

/// A single row predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`, compared in the column's text form.
    Eq(String, String),
    /// `column IS NULL`.
    IsNull(String),
}

impl Filter {
    /// PostgREST `(key, value)` pair, value already percent-encoded.
    #[must_use]
    pub fn to_param(&self) -> (String, String) {
        match self {
            Self::Eq(column, value) => (column.clone(), format!("eq.{}", urlencoding::encode(value))),
            Self::IsNull(column) => (column.clone(), "is.null".to_string()),
        }
    }

    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        match self {
            Self::Eq(column, expected) => {
                text_form(row.get(column)).is_some_and(|actual| &actual == expected)
            }
            Self::IsNull(column) => row.get(column).is_none_or(Value::is_null),
        }
    }
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
    pub nulls_first: bool,
}

impl OrderBy {
    /// Ascending, nulls last.
    #[must_use]
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
            nulls_first: false,
        }
    }

    /// Descending, nulls first.
    #[must_use]
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
            nulls_first: true,
        }
    }

    #[must_use]
    pub const fn nulls_last(mut self) -> Self {
        self.nulls_first = false;
        self
    }

    #[must_use]
    pub const fn nulls_first(mut self) -> Self {
        self.nulls_first = true;
        self
    }

    fn encode(&self) -> String {
        format!(
            "{}.{}.{}",
            self.column,
            if self.ascending { "asc" } else { "desc" },
            if self.nulls_first { "nullsfirst" } else { "nullslast" }
        )
    }

    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let a = a.get(&self.column).filter(|v| !v.is_null());
        let b = b.get(&self.column).filter(|v| !v.is_null());
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => {
                if self.nulls_first {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Some(_), None) => {
                if self.nulls_first {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (Some(a), Some(b)) => {
                let ord = compare_values(a, b);
                if self.ascending { ord } else { ord.reverse() }
            }
        }
    }
}

/// Filters, sort keys, and an optional row limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Vec<OrderBy>,
    pub limit: Option<u32>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(Filter::Eq(column.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn is_null(mut self, column: impl Into<String>) -> Self {
        self.filters.push(Filter::IsNull(column.into()));
        self
    }

    #[must_use]
    pub fn order(mut self, order: OrderBy) -> Self {
        self.order.push(order);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// PostgREST parameters: filters, then `order`, then `limit`.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self.filters.iter().map(Filter::to_param).collect();
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(OrderBy::encode)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".into(), order));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".into(), limit.to_string()));
        }
        params
    }

    /// Encoded query string (without the leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }

    /// Filter, sort (stable), and truncate `rows` the way the table API would.
    #[must_use]
    pub fn apply(&self, rows: &[Value]) -> Vec<Value> {
        let mut selected: Vec<Value> = rows.iter().filter(|r| self.matches(r)).cloned().collect();
        selected.sort_by(|a, b| {
            self.order
                .iter()
                .map(|o| o.compare(a, b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        if let Some(limit) = self.limit {
            selected.truncate(limit as usize);
        }
        selected
    }
}

/// Text form of a scalar JSON value, as PostgREST compares it.
fn text_form(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .zip(b.as_f64())
            .and_then(|(a, b)| a.partial_cmp(&b))
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
