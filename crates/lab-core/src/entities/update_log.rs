use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Source tag for logs drafted from daily report files.
pub const DAILY_REPORT_SOURCE: &str = "daily_report";

/// A timestamped free-text progress note, optionally machine-summarized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateLog {
    pub id: String,
    pub workspace_id: String,
    pub idea_id: String,
    /// Free string such as `manual` or `daily_report`.
    pub source: String,
    pub title: String,
    pub body_md: String,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub ai_tags: Vec<String>,
    /// Reserved; always empty today.
    #[serde(default)]
    pub ai_risk_flags: Vec<String>,
    pub created_at: DateTime<Utc>,
}
