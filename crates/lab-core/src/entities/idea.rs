use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;
use crate::errors::CoreError;
use crate::month::YearMonth;

/// A research initiative, the top-level planning unit of a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Idea {
    pub id: String,
    pub workspace_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ItemStatus,
    #[serde(default)]
    pub main_topic_flag: bool,
    pub start_month: YearMonth,
    pub target_month: YearMonth,
    pub priority_inputs: PriorityInputs,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Operator-assigned scores, each on a 1 to 5 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PriorityInputs {
    pub impact: u8,
    pub effort: u8,
    pub risk: u8,
    pub urgency: u8,
}

impl PriorityInputs {
    /// Check every score is within `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first out-of-range score.
    pub fn validate(&self) -> Result<(), CoreError> {
        let scores = [
            ("impact", self.impact),
            ("effort", self.effort),
            ("risk", self.risk),
            ("urgency", self.urgency),
        ];
        for (name, score) in scores {
            if !(1..=5).contains(&score) {
                return Err(CoreError::Validation(format!(
                    "priority_inputs.{name} must be between 1 and 5, got {score}"
                )));
            }
        }
        Ok(())
    }
}
