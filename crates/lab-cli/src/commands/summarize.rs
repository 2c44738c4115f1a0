use anyhow::Context;
use lab_config::LabConfig;
use lab_summarize::{AnySummarizer, Summarizer};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummarizeArgs;
use crate::output::output;

/// Handle `labtrack summarize`.
pub async fn handle(
    args: &SummarizeArgs,
    config: &LabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read report {}", args.file.display()))?;
    let body = String::from_utf8_lossy(&raw);

    let summarizer = AnySummarizer::from_config(config);
    let summary = summarizer.summarize(&body).await;
    output(&summary, flags.format)
}
