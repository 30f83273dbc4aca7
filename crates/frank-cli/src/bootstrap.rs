use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use frank_auth::AuthClient;
use frank_config::{BackendConfig, FrankConfig};

/// Load `.env`, then the layered frank configuration.
pub fn load_config() -> anyhow::Result<FrankConfig> {
    load_project_dotenv()?;
    FrankConfig::load().context("failed to load frank configuration")
}

/// The backend section, or an error naming the variables to set.
pub fn require_backend(config: &FrankConfig) -> anyhow::Result<&BackendConfig> {
    config.backend.validate().context(
        "backend is not usable: set FRANK_BACKEND__URL and FRANK_BACKEND__ANON_KEY \
         (or [backend] in .frank/config.toml)",
    )?;
    Ok(&config.backend)
}

pub const fn request_timeout(backend: &BackendConfig) -> Duration {
    Duration::from_secs(backend.timeout_secs)
}

pub fn auth_client(config: &FrankConfig) -> anyhow::Result<AuthClient> {
    let backend = require_backend(config)?;
    AuthClient::new(backend.auth_url(), &backend.anon_key, request_timeout(backend))
        .context("failed to build auth client")
}

/// Prefer the `.env` next to the nearest `.frank` directory, then the
/// current directory's.
fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    if let Some(root) = find_project_root(&cwd) {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }
    dotenvy::dotenv().ok();
    Ok(())
}

/// Nearest ancestor of `start` (inclusive) holding a `.frank` directory.
fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".frank").is_dir())
        .map(Path::to_path_buf)
}
