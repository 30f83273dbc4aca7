//! General application configuration.

use frank_core::enums::WeekStart;
use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// First day of the week used when a weekly plan has no explicit dates.
    #[serde(default)]
    pub week_starts_on: WeekStart,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            week_starts_on: WeekStart::default(),
        }
    }
}
