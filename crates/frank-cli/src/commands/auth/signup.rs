use anyhow::Context;
use frank_config::FrankConfig;
use frank_core::responses::SignUpResponse;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthCredentialArgs;
use crate::output::output;

/// Handle `frank auth signup`.
pub async fn run(
    args: &AuthCredentialArgs,
    flags: &GlobalFlags,
    config: &FrankConfig,
) -> anyhow::Result<()> {
    let client = bootstrap::auth_client(config)?;
    let outcome = client
        .sign_up(args.email.trim(), &args.password)
        .await
        .context("sign up failed")?;

    if let Some(session) = &outcome.session {
        frank_auth::token_store::store(session).context("failed to store session")?;
        tracing::info!(user_id = %session.user.id, "signed up and signed in");
    }

    let message = if outcome.confirmation_required {
        "Check your email to confirm the account, then run 'frank auth login'."
    } else {
        "Account created and signed in."
    };

    output(
        &SignUpResponse {
            user_id: outcome.user_id,
            email: outcome.email,
            confirmation_required: outcome.confirmation_required,
            message: message.to_string(),
        },
        flags.format,
    )
}
