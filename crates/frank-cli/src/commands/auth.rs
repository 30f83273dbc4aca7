use frank_config::FrankConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

pub mod login;
pub mod logout;
pub mod signup;
pub mod status;

/// Handle `frank auth`.
///
/// Runs before the planner context is opened, so none of these need a
/// stored session.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &FrankConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Signup(args) => signup::run(args, flags, config).await,
        AuthCommands::Login(args) => login::run(args, flags, config).await,
        AuthCommands::Logout => logout::run(flags, config).await,
        AuthCommands::Status => status::run(flags),
    }
}
