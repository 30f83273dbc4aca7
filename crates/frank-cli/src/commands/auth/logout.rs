use anyhow::Context;
use frank_config::FrankConfig;
use serde_json::json;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `frank auth logout`.
///
/// Local credentials are cleared even when the backend is not configured.
pub async fn run(flags: &GlobalFlags, config: &FrankConfig) -> anyhow::Result<()> {
    let client = bootstrap::auth_client(config).ok();
    frank_auth::logout(client.as_ref())
        .await
        .context("failed to clear stored session")?;
    output(&json!({ "cleared": true }), flags.format)
}
