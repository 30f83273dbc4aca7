//! Service layer scoping every table call to the signed-in user.
//!
//! `PlannerService` wraps `PlannerDb` (raw table access) and the current user
//! id. All repo methods are implemented as `impl PlannerService` blocks in
//! `repos/`. Reads always filter `user_id = eq.<user>`; updates and deletes
//! filter on both `id` and `user_id`.

use frank_core::enums::WeekStart;

use crate::PlannerDb;
use crate::query::Query;

pub struct PlannerService {
    db: PlannerDb,
    user_id: String,
    week_start: WeekStart,
}

impl PlannerService {
    #[must_use]
    pub fn new(db: PlannerDb, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            week_start: WeekStart::default(),
        }
    }

    /// Set the first day of the week used for default weekly plan dates.
    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Access the underlying table handle.
    #[must_use]
    pub const fn db(&self) -> &PlannerDb {
        &self.db
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// `user_id = eq.<user>`.
    pub(crate) fn owned(&self) -> Query {
        Query::new().eq("user_id", &self.user_id)
    }

    /// `id = eq.<id>` and `user_id = eq.<user>`.
    pub(crate) fn owned_row(&self, id: &str) -> Query {
        Query::new().eq("id", id).eq("user_id", &self.user_id)
    }
}
