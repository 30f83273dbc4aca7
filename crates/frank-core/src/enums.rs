//! Quadrant, table, and kind enums for frank.
//!
//! String-valued enums use `snake_case` serialization. `Quadrant` is the
//! exception: the backend stores it as a small integer column, so it
//! serializes as `1`..=`4`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Quadrant
// ---------------------------------------------------------------------------

/// Urgent/important bucket assigned to a to-do.
///
/// ```text
///              urgent        not urgent
/// important    1             2
/// other        3             4
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quadrant {
    ImportantUrgent,
    #[default]
    ImportantNotUrgent,
    UrgentNotImportant,
    Neither,
}

impl Quadrant {
    /// All quadrants in display order.
    pub const ALL: [Self; 4] = [
        Self::ImportantUrgent,
        Self::ImportantNotUrgent,
        Self::UrgentNotImportant,
        Self::Neither,
    ];

    /// The integer stored in the `quadrant` column.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::ImportantUrgent => 1,
            Self::ImportantNotUrgent => 2,
            Self::UrgentNotImportant => 3,
            Self::Neither => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ImportantUrgent => "Important & urgent",
            Self::ImportantNotUrgent => "Important, not urgent",
            Self::UrgentNotImportant => "Urgent, not important",
            Self::Neither => "Neither urgent nor important",
        }
    }

    /// Zero-based position in [`Quadrant::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.number()) - 1
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::ImportantUrgent),
            2 => Ok(Self::ImportantNotUrgent),
            3 => Ok(Self::UrgentNotImportant),
            4 => Ok(Self::Neither),
            other => Err(CoreError::Validation(format!(
                "quadrant must be between 1 and 4, got {other}"
            ))),
        }
    }
}

impl From<Quadrant> for u8 {
    fn from(value: Quadrant) -> Self {
        value.number()
    }
}

impl FromStr for Quadrant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(format!("quadrant must be 1-4, got '{s}'")))?;
        Self::try_from(number)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl JsonSchema for Quadrant {
    fn schema_name() -> Cow<'static, str> {
        "Quadrant".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1,
            "maximum": 4,
        })
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Backend tables the planner reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Values,
    AnnualGoals,
    MonthlyGoals,
    WeeklyPlans,
    Todos,
    WeeklyReviews,
    DailyReviews,
}

impl Table {
    pub const ALL: [Self; 7] = [
        Self::Values,
        Self::AnnualGoals,
        Self::MonthlyGoals,
        Self::WeeklyPlans,
        Self::Todos,
        Self::WeeklyReviews,
        Self::DailyReviews,
    ];

    /// Table name as it appears in the REST path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::AnnualGoals => "annual_goals",
            Self::MonthlyGoals => "monthly_goals",
            Self::WeeklyPlans => "weekly_plans",
            Self::Todos => "todos",
            Self::WeeklyReviews => "weekly_reviews",
            Self::DailyReviews => "daily_reviews",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GoalKind
// ---------------------------------------------------------------------------

/// Annual or monthly goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Annual,
    Monthly,
}

impl GoalKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Monthly => "monthly",
        }
    }

    #[must_use]
    pub const fn table(self) -> Table {
        match self {
            Self::Annual => Table::AnnualGoals,
            Self::Monthly => Table::MonthlyGoals,
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReviewKind
// ---------------------------------------------------------------------------

/// Weekly or daily review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewKind {
    Weekly,
    Daily,
}

impl ReviewKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Daily => "daily",
        }
    }

    #[must_use]
    pub const fn table(self) -> Table {
        match self {
            Self::Weekly => Table::WeeklyReviews,
            Self::Daily => Table::DailyReviews,
        }
    }
}

impl fmt::Display for ReviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WeekStart
// ---------------------------------------------------------------------------

/// First day of the planning week.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
