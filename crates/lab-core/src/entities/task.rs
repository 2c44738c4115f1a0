use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;
use crate::errors::CoreError;
use crate::month::YearMonth;

const fn default_importance() -> u8 {
    3
}

/// A unit of work under an idea.
///
/// `dependencies` holds task ids in the order they were declared. They may
/// point at tasks of other ideas or at nothing at all.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub workspace_id: String,
    pub idea_id: String,
    #[serde(default)]
    pub phase_id: Option<String>,
    pub title: String,
    pub status: ItemStatus,
    #[serde(default = "default_importance")]
    pub importance: u8,
    pub start_month: YearMonth,
    pub end_month: YearMonth,
    pub due_month: YearMonth,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Manual display order; the engine never sorts by it.
    #[serde(default)]
    pub sort_order: i64,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Check `importance` is within `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if it is not.
    pub fn validate(&self) -> Result<(), CoreError> {
        if (1..=5).contains(&self.importance) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "task {} importance must be between 1 and 5, got {}",
                self.id, self.importance
            )))
        }
    }
}
