use anyhow::Context;
use frank_config::FrankConfig;
use serde_json::json;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthCredentialArgs;
use crate::output::output;

/// Handle `frank auth login`.
pub async fn run(
    args: &AuthCredentialArgs,
    flags: &GlobalFlags,
    config: &FrankConfig,
) -> anyhow::Result<()> {
    let client = bootstrap::auth_client(config)?;
    let session = frank_auth::login(&client, args.email.trim(), &args.password)
        .await
        .context("login failed")?;

    tracing::info!(user_id = %session.user.id, "signed in");
    output(
        &json!({
            "authenticated": true,
            "user_id": session.user.id,
            "email": session.user.email,
            "expires_at": session.expires_at.timestamp(),
        }),
        flags.format,
    )
}
