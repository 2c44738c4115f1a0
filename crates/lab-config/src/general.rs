//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_report_pattern() -> String {
    String::from("Daily_Report_*.md")
}

fn default_workspace_id() -> String {
    String::from("default")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Glob matched against file names when ingesting daily reports.
    #[serde(default = "default_report_pattern")]
    pub report_pattern: String,

    /// Workspace id stamped on drafted logs when none is given.
    #[serde(default = "default_workspace_id")]
    pub workspace_id: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            report_pattern: default_report_pattern(),
            workspace_id: default_workspace_id(),
        }
    }
}
