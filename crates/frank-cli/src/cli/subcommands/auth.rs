use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account.
    Signup(AuthCredentialArgs),
    /// Sign in with email and password.
    Login(AuthCredentialArgs),
    /// Revoke and clear the stored session.
    Logout,
    /// Show the stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthCredentialArgs {
    #[arg(long)]
    pub email: String,
    /// Password (falls back to FRANK_PASSWORD).
    #[arg(long, env = "FRANK_PASSWORD", hide_env_values = true)]
    pub password: String,
}
