//! Value update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

pub struct ValueUpdateBuilder(ValueUpdate);

impl ValueUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ValueUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: i32) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn build(self) -> ValueUpdate {
        self.0
    }
}

impl Default for ValueUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
