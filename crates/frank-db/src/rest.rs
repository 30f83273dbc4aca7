//! PostgREST-style table client (`{url}/rest/v1/{table}`).
//!
//! Request construction is split from sending so URLs, headers, and bodies
//! can be checked without a server.

use std::time::Duration;

use frank_core::enums::Table;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use crate::error::DatabaseError;
use crate::query::Query;
use crate::retry::{self, RetryConfig};

#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
    access_token: String,
    retry: RetryConfig,
}

impl RestClient {
    /// # Errors
    ///
    /// Returns `DatabaseError::Http` if the HTTP client cannot be constructed.
    pub fn new(
        rest_url: &str,
        anon_key: &str,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            rest_url: rest_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: access_token.to_string(),
            retry: RetryConfig::default(),
        })
    }

    pub async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, DatabaseError> {
        retry::with_retry(&self.retry, "select", move || async move {
            let resp = check_response(self.select_request(table, query).send().await?).await?;
            Ok(resp.json::<Vec<Value>>().await?)
        })
        .await
    }

    pub async fn insert(&self, table: Table, row: &Value) -> Result<Value, DatabaseError> {
        let resp = check_response(self.insert_request(table, row).send().await?).await?;
        let mut rows = resp.json::<Vec<Value>>().await?;
        if rows.is_empty() {
            return Err(DatabaseError::NoResult);
        }
        Ok(rows.swap_remove(0))
    }

    pub async fn update(
        &self,
        table: Table,
        query: &Query,
        patch: &Value,
    ) -> Result<Vec<Value>, DatabaseError> {
        let resp = check_response(self.update_request(table, query, patch).send().await?).await?;
        Ok(resp.json::<Vec<Value>>().await?)
    }

    pub async fn delete(&self, table: Table, query: &Query) -> Result<u64, DatabaseError> {
        let resp = check_response(self.delete_request(table, query).send().await?).await?;
        let rows = resp.json::<Vec<Value>>().await?;
        Ok(rows.len() as u64)
    }

    pub async fn count(&self, table: Table, query: &Query) -> Result<u64, DatabaseError> {
        retry::with_retry(&self.retry, "count", move || async move {
            let resp = check_response(self.count_request(table, query).send().await?).await?;
            let range = resp
                .headers()
                .get(reqwest::header::CONTENT_RANGE)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| DatabaseError::Parse("missing Content-Range header".into()))?;
            parse_content_range_total(range)
        })
        .await
    }

    // --- Request construction ---

    fn url(&self, table: Table, query_string: &str) -> String {
        if query_string.is_empty() {
            format!("{}/{table}", self.rest_url)
        } else {
            format!("{}/{table}?{query_string}", self.rest_url)
        }
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        tracing::debug!(%method, %url, "table request");
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.access_token)
    }

    fn select_request(&self, table: Table, query: &Query) -> RequestBuilder {
        let qs = with_select(query);
        self.request(Method::GET, self.url(table, &qs))
    }

    fn insert_request(&self, table: Table, row: &Value) -> RequestBuilder {
        self.request(Method::POST, self.url(table, ""))
            .header("Prefer", "return=representation")
            .json(row)
    }

    fn update_request(&self, table: Table, query: &Query, patch: &Value) -> RequestBuilder {
        self.request(Method::PATCH, self.url(table, &query.to_query_string()))
            .header("Prefer", "return=representation")
            .json(patch)
    }

    fn delete_request(&self, table: Table, query: &Query) -> RequestBuilder {
        self.request(Method::DELETE, self.url(table, &query.to_query_string()))
            .header("Prefer", "return=representation")
    }

    fn count_request(&self, table: Table, query: &Query) -> RequestBuilder {
        let qs = with_select(query);
        self.request(Method::HEAD, self.url(table, &qs))
            .header("Prefer", "count=exact")
    }
}

fn with_select(query: &Query) -> String {
    let rest = query.to_query_string();
    if rest.is_empty() {
        "select=*".to_string()
    } else {
        format!("select=*&{rest}")
    }
}

/// Check a table API response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`DatabaseError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **401/403** → [`DatabaseError::Unauthorized`].
/// - **Non-success status** → [`DatabaseError::Api`] with status code and
///   the API's error message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, DatabaseError> {
    let status = resp.status();
    if status == 429 {
        let retry_after = parse_retry_after(&resp);
        tracing::warn!(retry_after, "table API rate limited");
        return Err(DatabaseError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body);
    tracing::warn!(status = status.as_u16(), %message, "table request failed");
    if status == 401 || status == 403 {
        return Err(DatabaseError::Unauthorized(message));
    }
    Err(DatabaseError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// PostgREST error bodies carry `message`; anything else is passed through.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(ToString::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Total from `Content-Range: 0-24/3573` or `*/0`.
///
/// # Errors
///
/// `DatabaseError::Parse` when the total is missing or `*`.
pub fn parse_content_range_total(range: &str) -> Result<u64, DatabaseError> {
    range
        .rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse::<u64>().ok())
        .ok_or_else(|| DatabaseError::Parse(format!("unparseable Content-Range '{range}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::OrderBy;
    use serde_json::json;

    fn client() -> RestClient {
        RestClient::new(
            "https://abc123.supabase.co/rest/v1/",
            "anon",
            "jwt-token",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn select_request_encodes_query() {
        let query = Query::new()
            .eq("user_id", "u1")
            .order(OrderBy::asc("priority"));
        let req = client().select_request(Table::Values, &query).build().unwrap();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.url().as_str(),
            "https://abc123.supabase.co/rest/v1/values?select=*&user_id=eq.u1&order=priority.asc.nullslast"
        );
        assert_eq!(req.headers()["apikey"], "anon");
        assert_eq!(req.headers()["authorization"], "Bearer jwt-token");
    }

    #[test]
    fn insert_request_asks_for_representation() {
        let row = json!({"title": "Health", "user_id": "u1"});
        let req = client().insert_request(Table::Values, &row).build().unwrap();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.url().as_str(), "https://abc123.supabase.co/rest/v1/values");
        assert_eq!(req.headers()["prefer"], "return=representation");
        let body: Value =
            serde_json::from_slice(req.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(body, row);
    }

    #[test]
    fn update_request_is_patch_with_filters() {
        let query = Query::new().eq("id", "t1").eq("user_id", "u1");
        let req = client()
            .update_request(Table::Todos, &query, &json!({"completed": true}))
            .build()
            .unwrap();
        assert_eq!(req.method(), Method::PATCH);
        assert_eq!(req.url().query(), Some("id=eq.t1&user_id=eq.u1"));
    }

    #[test]
    fn delete_request_targets_filtered_rows() {
        let query = Query::new().eq("id", "g1").eq("user_id", "u1");
        let req = client().delete_request(Table::AnnualGoals, &query).build().unwrap();
        assert_eq!(req.method(), Method::DELETE);
        assert_eq!(req.url().path(), "/rest/v1/annual_goals");
    }

    #[test]
    fn count_request_is_head_with_exact_count() {
        let query = Query::new().eq("user_id", "u1").eq("year", 2024);
        let req = client().count_request(Table::AnnualGoals, &query).build().unwrap();
        assert_eq!(req.method(), Method::HEAD);
        assert_eq!(req.headers()["prefer"], "count=exact");
        assert_eq!(req.url().query(), Some("select=*&user_id=eq.u1&year=eq.2024"));
    }

    #[test]
    fn content_range_totals() {
        assert_eq!(parse_content_range_total("0-24/3573").unwrap(), 3573);
        assert_eq!(parse_content_range_total("*/0").unwrap(), 0);
        assert!(parse_content_range_total("0-24/*").is_err());
        assert!(parse_content_range_total("garbage").is_err());
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let body = r#"{"code":"PGRST301","message":"JWT expired"}"#;
        let err = check_response(mock_response(401, body)).await.unwrap_err();
        match err {
            DatabaseError::Unauthorized(message) => assert_eq!(message, "JWT expired"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let body = r#"{"code":"23503","message":"violates foreign key constraint"}"#;
        let err = check_response(mock_response(409, body)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Api { status: 409, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "[]")).await.is_ok());
    }
}
