use std::path::PathBuf;

use clap::{Args, Subcommand};
use lab_core::month::YearMonth;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Workspace dashboard: idea status counts, delayed and low-activity tasks.
    Overview(OverviewArgs),
    /// Completion ratios for one idea.
    Progress(IdeaArgs),
    /// Delay, staleness and dependency risks for one idea.
    Risks(IdeaMonthArgs),
    /// Suggested next actions for one idea.
    Next(IdeaMonthArgs),
    /// Summarize a markdown report into text and tags.
    Summarize(SummarizeArgs),
    /// Draft update logs from a directory of daily reports.
    Ingest(IngestArgs),
    /// Check remote summarization configuration and connectivity.
    AiStatus,
}

#[derive(Clone, Debug, Args)]
pub struct OverviewArgs {
    /// Workspace snapshot JSON file.
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Evaluation month, YYYY-MM (defaults to the current UTC month).
    #[arg(long)]
    pub month: Option<YearMonth>,
}

#[derive(Clone, Debug, Args)]
pub struct IdeaArgs {
    /// Workspace snapshot JSON file.
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Idea ID.
    #[arg(long)]
    pub idea: String,
}

#[derive(Clone, Debug, Args)]
pub struct IdeaMonthArgs {
    /// Workspace snapshot JSON file.
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Idea ID.
    #[arg(long)]
    pub idea: String,

    /// Evaluation month, YYYY-MM (defaults to the current UTC month).
    #[arg(long)]
    pub month: Option<YearMonth>,
}

#[derive(Clone, Debug, Args)]
pub struct SummarizeArgs {
    /// Markdown report file.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct IngestArgs {
    /// Directory containing report files.
    #[arg(long)]
    pub dir: PathBuf,

    /// Idea the drafted logs belong to.
    #[arg(long)]
    pub idea: String,

    /// Workspace ID (defaults to `general.workspace_id`).
    #[arg(long)]
    pub workspace: Option<String>,

    /// File name glob (defaults to `general.report_pattern`).
    #[arg(long)]
    pub pattern: Option<String>,

    /// Snapshot whose existing log titles are skipped.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}
