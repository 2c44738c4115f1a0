use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DeliverableStatus;
use crate::month::YearMonth;

/// A concrete output artifact tied to an idea (paper, report, prototype, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Deliverable {
    pub id: String,
    pub workspace_id: String,
    pub idea_id: String,
    pub title: String,
    /// Free-form artifact kind.
    #[serde(rename = "type")]
    pub kind: String,
    pub due_month: YearMonth,
    pub status: DeliverableStatus,
}
