//! Transient table API error retry logic.
//!
//! Reads (`select`, `count`) are retried with exponential backoff when the
//! hosted API reports rate limiting or a gateway hiccup. Writes are never
//! retried: a timed-out insert may already have landed.

use std::future::Future;
use std::time::Duration;

use crate::error::DatabaseError;

/// Configuration for retry behavior on transient API errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff and `Retry-After` are capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

/// Detect transient table API errors.
///
/// Narrow on purpose: constraint violations, auth failures, and parse errors
/// are never retried.
pub fn is_transient(e: &DatabaseError) -> bool {
    match e {
        DatabaseError::RateLimited { .. } => true,
        DatabaseError::Api { status, .. } => matches!(status, 502..=504),
        DatabaseError::Http(e) => e.is_timeout() || e.is_connect(),
        _ => false,
    }
}

/// Delay before the next attempt. `Retry-After` wins over backoff, both capped.
fn next_delay(cfg: &RetryConfig, e: &DatabaseError, backoff: Duration) -> Duration {
    let wanted = match e {
        DatabaseError::RateLimited { retry_after_secs } => Duration::from_secs(*retry_after_secs),
        _ => backoff,
    };
    wanted.min(cfg.max_delay)
}

/// Run `op` until it succeeds, fails with a non-transient error, or
/// `max_attempts` is exhausted.
///
/// # Errors
///
/// Returns the last error from `op`.
pub async fn with_retry<T, F, Fut>(
    cfg: &RetryConfig,
    op_name: &str,
    mut op: F,
) -> Result<T, DatabaseError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DatabaseError>>,
{
    let mut backoff = cfg.base_delay;
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if is_transient(&e) && attempt < cfg.max_attempts => {
                let delay = next_delay(cfg, &e, backoff);
                tracing::warn!(
                    op = op_name,
                    attempt,
                    max_attempts = cfg.max_attempts,
                    ?delay,
                    error = %e,
                    "transient table API error, retrying",
                );
                tokio::time::sleep(delay).await;
                backoff = (backoff * 2).min(cfg.max_delay);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
