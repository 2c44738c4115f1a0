use lab_config::LabConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `labtrack ai-status`.
pub async fn handle(config: &LabConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = lab_summarize::ai_status(&config.openai).await;
    output(&report, flags.format)
}
