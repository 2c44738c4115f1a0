//! Status enums and risk classification enums for labtrack.
//!
//! Status enums use `snake_case` serialization. Risk codes use
//! `SCREAMING_SNAKE_CASE` so they read as stable identifiers on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Lifecycle status shared by ideas and tasks.
///
/// ```text
/// planned → in_progress → completed
///                       → on_hold → in_progress
///                       → stopped
/// any     → discarded
/// ```
///
/// Transitions are not enforced; the analytics engine only reads status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Planned,
    InProgress,
    Completed,
    OnHold,
    Stopped,
    Discarded,
}

impl ItemStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Planned,
        Self::InProgress,
        Self::Completed,
        Self::OnHold,
        Self::Stopped,
        Self::Discarded,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
            Self::Stopped => "stopped",
            Self::Discarded => "discarded",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DeliverableStatus
// ---------------------------------------------------------------------------

/// Status of a deliverable. Deliverables cannot be held, stopped, or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    Planned,
    InProgress,
    Completed,
}

impl DeliverableStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for DeliverableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskCode
// ---------------------------------------------------------------------------

/// Kind of condition flagged by the risk detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCode {
    /// A task is past its due month and not completed.
    Delayed,
    /// The idea has logs, but none within the staleness window.
    LowActivity,
    /// The idea has no update logs at all.
    NoLog,
    /// An in-progress task depends on a task that is not completed.
    DependencyViolation,
}

impl RiskCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delayed => "DELAYED",
            Self::LowActivity => "LOW_ACTIVITY",
            Self::NoLog => "NO_LOG",
            Self::DependencyViolation => "DEPENDENCY_VIOLATION",
        }
    }

    /// Severity attached to every risk of this kind.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Delayed => Severity::High,
            Self::LowActivity | Self::NoLog | Self::DependencyViolation => Severity::Medium,
        }
    }
}

impl fmt::Display for RiskCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a risk item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RelatedEntity
// ---------------------------------------------------------------------------

/// Entity type a risk item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelatedEntity {
    Idea,
    Task,
}

impl RelatedEntity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for RelatedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_status_serializes_snake_case() {
        let json = serde_json::to_string(&ItemStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: ItemStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(back, ItemStatus::OnHold);
    }

    #[test]
    fn item_status_all_matches_display() {
        let names: Vec<String> = ItemStatus::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "planned",
                "in_progress",
                "completed",
                "on_hold",
                "stopped",
                "discarded"
            ]
        );
    }

    #[test]
    fn deliverable_status_rejects_item_only_values() {
        assert!(serde_json::from_str::<DeliverableStatus>("\"discarded\"").is_err());
    }

    #[test]
    fn risk_code_wire_format_and_severity() {
        assert_eq!(
            serde_json::to_string(&RiskCode::DependencyViolation).unwrap(),
            "\"DEPENDENCY_VIOLATION\""
        );
        assert_eq!(RiskCode::Delayed.severity(), Severity::High);
        assert_eq!(RiskCode::NoLog.severity(), Severity::Medium);
        assert_eq!(RiskCode::LowActivity.to_string(), "LOW_ACTIVITY");
    }
}
