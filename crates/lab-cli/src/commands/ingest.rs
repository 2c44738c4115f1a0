use std::collections::HashSet;

use anyhow::Context;
use chrono::Utc;
use lab_config::LabConfig;
use lab_summarize::AnySummarizer;

use crate::cli::root_commands::IngestArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::{existing_log_titles, load_snapshot};
use crate::output::{output, to_ndjson};

/// Handle `labtrack ingest`.
///
/// Drafts one update log per new report and prints them; nothing is written
/// back to the snapshot. The workspace is `--workspace`, else the snapshot's,
/// else `general.workspace_id`.
pub async fn handle(
    args: &IngestArgs,
    config: &LabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = args.snapshot.as_deref().map(load_snapshot).transpose()?;
    let existing = match &snapshot {
        Some(snapshot) => {
            if snapshot.idea(&args.idea).is_none() {
                tracing::warn!(idea = %args.idea, "idea not found in snapshot");
            }
            existing_log_titles(snapshot, &args.idea)
        }
        None => HashSet::new(),
    };
    let workspace_id = args
        .workspace
        .as_deref()
        .or_else(|| snapshot.as_ref().and_then(|s| s.workspace_id()))
        .unwrap_or(&config.general.workspace_id);
    let pattern = args
        .pattern
        .as_deref()
        .unwrap_or(&config.general.report_pattern);

    let summarizer = AnySummarizer::from_config(config);
    let logs = lab_summarize::ingest_reports(
        &summarizer,
        &args.dir,
        pattern,
        workspace_id,
        &args.idea,
        &existing,
        Utc::now(),
    )
    .await
    .with_context(|| format!("failed to ingest reports from {}", args.dir.display()))?;

    if !flags.quiet {
        eprintln!("drafted {} log(s) for {}", logs.len(), args.idea);
    }

    match flags.format {
        OutputFormat::Raw => {
            print!("{}", to_ndjson(&logs)?);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Table => output(&logs, flags.format),
    }
}
