//! Values produced by the analytics and summarization engine.
//!
//! These are plain derived data; callers decide whether to persist them.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ItemStatus, RelatedEntity, RiskCode, Severity};

/// Completion ratios for one idea, each in `0.0..=1.0` and rounded to four
/// decimal places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgressReport {
    pub task_completion: f64,
    pub deliverable_completion: f64,
    pub overall: f64,
}

/// A flagged condition surfaced for operator attention.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskItem {
    pub code: RiskCode,
    pub severity: Severity,
    pub message: String,
    pub related_entity: RelatedEntity,
    pub related_id: String,
}

impl RiskItem {
    /// Build a risk with the severity implied by its code.
    #[must_use]
    pub fn new(
        code: RiskCode,
        message: impl Into<String>,
        related_entity: RelatedEntity,
        related_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            related_entity,
            related_id: related_id.into(),
        }
    }

    /// Deduplication key, `"<CODE>:<related_id>"`.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!("{}:{}", self.code, self.related_id)
    }
}

/// Workspace-wide rollup shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardOverview {
    pub total_ideas: usize,
    /// Always contains every [`ItemStatus`], zero when no idea has it.
    pub idea_status_counts: BTreeMap<ItemStatus, usize>,
    pub delayed_tasks: usize,
    pub low_activity_tasks: usize,
}

/// Condensed form of a markdown report body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Summary {
    /// At most 1200 characters.
    pub text: String,
    /// At most five lowercase tags.
    pub tags: Vec<String>,
}

/// Connectivity state of the remote summarization service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AiStatus {
    /// No credential configured; local summarization is used.
    Inactive,
    Active,
    Error,
}

/// Result of probing the remote summarization configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AiStatusReport {
    pub configured: bool,
    pub model: String,
    pub status: AiStatus,
    pub message: String,
    pub monthly_budget_usd: f64,
}
