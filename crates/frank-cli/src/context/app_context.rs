use anyhow::Context;
use frank_auth::Session;
use frank_config::FrankConfig;
use frank_db::{PlannerDb, PlannerService};

use crate::bootstrap;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: PlannerService,
    pub config: FrankConfig,
    pub session: Session,
}

impl AppContext {
    /// Resolve (and refresh if needed) the stored session, then open the
    /// table API as that user.
    pub async fn init(config: FrankConfig) -> anyhow::Result<Self> {
        let client = bootstrap::auth_client(&config)?;
        let session = frank_auth::resolve_session(&client)
            .await
            .context("not signed in. Run 'frank auth login' first.")?;

        let backend = bootstrap::require_backend(&config)?;
        let db = PlannerDb::open_remote(
            &backend.rest_url(),
            &backend.anon_key,
            &session.access_token,
            bootstrap::request_timeout(backend),
        )
        .context("failed to open table API client")?;

        tracing::debug!(user_id = %session.user.id, "planner context ready");
        let service = PlannerService::new(db, session.user.id.clone())
            .with_week_start(config.general.week_starts_on);

        Ok(Self {
            service,
            config,
            session,
        })
    }
}
