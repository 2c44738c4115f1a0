//! Daily report files to draft update logs.
//!
//! A reports directory holds markdown files such as
//! `Daily_Report_2026-03-14.md`. Each matching file becomes one
//! [`UpdateLog`] with source [`DAILY_REPORT_SOURCE`], titled by its file name
//! and dated by the `YYYY-MM-DD` in that name. Nothing is persisted here; the
//! caller stores the drafts.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use globset::Glob;
use lab_core::entities::{DAILY_REPORT_SOURCE, UpdateLog};
use lab_core::ids::{PREFIX_LOG, generate_id};

use crate::Summarizer;
use crate::error::SummarizeError;

const DATE_LEN: usize = "YYYY-MM-DD".len();

/// One report to turn into an update log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub workspace_id: String,
    pub idea_id: String,
    pub filename: String,
    pub body: String,
}

/// The first `YYYY-MM-DD` in `filename` that is a real calendar date, as
/// midnight UTC.
#[must_use]
pub fn extract_report_date(filename: &str) -> Option<DateTime<Utc>> {
    let bytes = filename.as_bytes();
    if bytes.len() < DATE_LEN {
        return None;
    }
    (0..=bytes.len() - DATE_LEN)
        .filter(|&start| is_date_shape(&bytes[start..start + DATE_LEN]))
        .filter_map(|start| filename.get(start..start + DATE_LEN))
        .find_map(|candidate| NaiveDate::parse_from_str(candidate, "%Y-%m-%d").ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

fn is_date_shape(window: &[u8]) -> bool {
    window.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Summarize one report into a new update log.
///
/// `created_at` is the date in the file name, or `now` when it has none.
///
/// # Errors
///
/// Returns [`SummarizeError::Core`] if an id cannot be generated.
pub async fn draft_report_log<S: Summarizer + Sync>(
    summarizer: &S,
    draft: ReportDraft,
    now: DateTime<Utc>,
) -> Result<UpdateLog, SummarizeError> {
    let summary = summarizer.summarize(&draft.body).await;
    let created_at = extract_report_date(&draft.filename).unwrap_or(now);
    Ok(UpdateLog {
        id: generate_id(PREFIX_LOG)?,
        workspace_id: draft.workspace_id,
        idea_id: draft.idea_id,
        source: DAILY_REPORT_SOURCE.to_string(),
        title: draft.filename,
        body_md: draft.body,
        ai_summary: Some(summary.text),
        ai_tags: summary.tags,
        ai_risk_flags: Vec::new(),
        created_at,
    })
}

/// Files directly inside `dir` whose names match the glob `pattern`, sorted
/// by file name.
///
/// # Errors
///
/// Returns [`SummarizeError::Pattern`] for an invalid glob and
/// [`SummarizeError::Io`] if the directory cannot be listed.
pub fn collect_reports(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, SummarizeError> {
    let matcher = Glob::new(pattern)
        .map_err(|source| SummarizeError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();
    let io_error = |source: std::io::Error| SummarizeError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut reports = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if !entry.file_type().map_err(io_error)?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.file_name().is_some_and(|name| matcher.is_match(name)) {
            reports.push(path);
        }
    }
    reports.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(reports)
}

/// Draft an update log for every report in `dir` matching `pattern` whose
/// file name is not already in `existing_titles`.
///
/// Bodies are read as UTF-8 with invalid sequences replaced.
///
/// # Errors
///
/// Returns [`SummarizeError::Io`] if the directory or a report cannot be
/// read, and the errors of [`collect_reports`] and [`draft_report_log`].
pub async fn ingest_reports<S: Summarizer + Sync>(
    summarizer: &S,
    dir: &Path,
    pattern: &str,
    workspace_id: &str,
    idea_id: &str,
    existing_titles: &HashSet<String>,
    now: DateTime<Utc>,
) -> Result<Vec<UpdateLog>, SummarizeError> {
    let mut drafted = Vec::new();
    for path in collect_reports(dir, pattern)? {
        let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping report with non UTF-8 file name");
            continue;
        };
        if existing_titles.contains(filename) {
            tracing::debug!(filename, "report already ingested");
            continue;
        }

        let raw = tokio::fs::read(&path)
            .await
            .map_err(|source| SummarizeError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let draft = ReportDraft {
            workspace_id: workspace_id.to_string(),
            idea_id: idea_id.to_string(),
            filename: filename.to_string(),
            body: String::from_utf8_lossy(&raw).into_owned(),
        };
        drafted.push(draft_report_log(summarizer, draft, now).await?);
    }
    tracing::debug!(count = drafted.len(), dir = %dir.display(), "drafted report logs");
    Ok(drafted)
}
