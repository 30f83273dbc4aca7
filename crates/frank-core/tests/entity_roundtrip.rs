//! Serde roundtrip and JsonSchema validation tests for all record types.

use chrono::{NaiveDate, Utc};
use frank_core::entities::*;
use frank_core::enums::*;
use frank_core::responses::*;
use frank_core::views::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample_todo() -> Todo {
    Todo {
        id: "7c1d2a9e-0000-4000-8000-000000000001".into(),
        user_id: "u-1".into(),
        weekly_plan_id: Some("plan-1".into()),
        title: "Draft quarterly letter".into(),
        content: Some("Two pages max".into()),
        due_date: Some(date("2024-05-20")),
        quadrant: Quadrant::ImportantUrgent,
        completed: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_value() -> Value {
    Value {
        id: "v-1".into(),
        user_id: "u-1".into(),
        title: "Family first".into(),
        description: Some("Dinner together every night".into()),
        priority: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(value_roundtrip, Value, sample_value());

roundtrip_and_validate!(
    annual_goal_roundtrip,
    AnnualGoal,
    AnnualGoal {
        id: "a-1".into(),
        user_id: "u-1".into(),
        value_id: None,
        title: "Run a marathon".into(),
        description: None,
        year: 2024,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    monthly_goal_roundtrip,
    MonthlyGoal,
    MonthlyGoal {
        id: "m-1".into(),
        user_id: "u-1".into(),
        annual_goal_id: "a-1".into(),
        title: "Run 100km".into(),
        description: Some("Mostly easy pace".into()),
        month: 5,
        year: 2024,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    weekly_plan_roundtrip,
    WeeklyPlan,
    WeeklyPlan {
        id: "w-1".into(),
        user_id: "u-1".into(),
        month_goal_id: Some("m-1".into()),
        week_start_date: date("2024-05-12"),
        week_end_date: date("2024-05-18"),
        theme: Some("Base building".into()),
        focus: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(todo_roundtrip, Todo, sample_todo());

roundtrip_and_validate!(
    weekly_review_roundtrip,
    WeeklyReview,
    WeeklyReview {
        id: "wr-1".into(),
        user_id: "u-1".into(),
        weekly_plan_id: "w-1".into(),
        what_went_well: Some("Hit every run".into()),
        what_could_improve: None,
        wins: Some("Long run PR".into()),
        learnings: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    daily_review_roundtrip,
    DailyReview,
    DailyReview {
        id: "dr-1".into(),
        user_id: "u-1".into(),
        review_date: date("2024-05-15"),
        gratitude: Some("Sunny morning".into()),
        wins: None,
        improvements: None,
        tomorrow_focus: Some("Ship the letter".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    dashboard_stats_roundtrip,
    DashboardStats,
    DashboardStats::from_todos(&[sample_todo()], date("2024-05-20"))
);

roundtrip_and_validate!(
    quadrant_matrix_roundtrip,
    QuadrantMatrix,
    QuadrantMatrix::build(&[sample_todo()])
);

roundtrip_and_validate!(
    delete_response_roundtrip,
    DeleteResponse,
    DeleteResponse {
        table: Table::Todos,
        id: "t-1".into(),
        deleted: true,
    }
);

roundtrip_and_validate!(
    move_value_response_roundtrip,
    MoveValueResponse,
    MoveValueResponse {
        moved: sample_value(),
        renumbered: 2,
        values: vec![sample_value()],
    }
);

#[test]
fn backend_row_with_missing_optionals_deserializes() {
    let row = serde_json::json!({
        "id": "t-9",
        "user_id": "u-1",
        "weekly_plan_id": null,
        "title": "Call the bank",
        "content": null,
        "due_date": null,
        "quadrant": 3,
        "completed": false,
        "created_at": "2024-05-01T09:00:00.123456+00:00",
        "updated_at": "2024-05-01T09:00:00.123456+00:00"
    });
    let todo: Todo = serde_json::from_value(row).unwrap();
    assert_eq!(todo.quadrant, Quadrant::UrgentNotImportant);
    assert_eq!(todo.due_date, None);
}

#[test]
fn todo_quadrant_out_of_range_is_rejected() {
    let mut row = serde_json::to_value(sample_todo()).unwrap();
    row["quadrant"] = serde_json::json!(7);
    assert!(serde_json::from_value::<Todo>(row).is_err());
}
