//! Shared test utilities for frank-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;
    use frank_core::enums::Table;
    use serde_json::Value;

    use crate::PlannerDb;
    use crate::service::PlannerService;

    pub const TEST_USER: &str = "00000000-0000-4000-8000-00000000a11c";
    pub const OTHER_USER: &str = "00000000-0000-4000-8000-0000000b0b00";

    /// In-memory service for the default test user.
    pub fn test_service() -> PlannerService {
        PlannerService::new(PlannerDb::open_memory(), TEST_USER)
    }

    /// Insert a raw row owned by [`OTHER_USER`] into the service's store.
    pub async fn insert_foreign(svc: &PlannerService, table: Table, mut row: Value) -> String {
        row["user_id"] = Value::String(OTHER_USER.into());
        let stored = svc.db().insert(table, &row).await.unwrap();
        stored["id"].as_str().unwrap().to_string()
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }
}
