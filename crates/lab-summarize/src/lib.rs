//! # lab-summarize
//!
//! Condenses markdown report bodies into a short [`Summary`] (at most
//! [`MAX_SUMMARY_CHARS`] characters) and up to [`MAX_TAGS`] topic tags.
//!
//! Two strategies implement [`Summarizer`]:
//! - [`LocalSummarizer`]: checklist and keyword heuristics, no network.
//! - [`RemoteSummarizer`]: asks a [`TextGenerator`] (the OpenAI Responses API
//!   via [`OpenAiClient`]) and falls back to the local strategy on any
//!   failure.
//!
//! [`AnySummarizer::from_config`] picks one from [`LabConfig`]. The crate
//! also probes remote connectivity ([`ai_status`]) and turns daily report
//! files into draft update logs ([`report`]).

pub mod error;
pub mod local;
pub mod openai;
pub mod remote;
pub mod report;
pub mod status;
mod text;

use std::future::Future;

use lab_config::LabConfig;
use lab_core::responses::Summary;

pub use error::SummarizeError;
pub use local::LocalSummarizer;
pub use openai::OpenAiClient;
pub use remote::{RemoteSummarizer, TextGenerator, parse_model_output};
pub use report::{
    ReportDraft, collect_reports, draft_report_log, extract_report_date, ingest_reports,
};
pub use status::ai_status;

/// Longest summary text produced by any strategy, in characters.
pub const MAX_SUMMARY_CHARS: usize = 1200;

/// Most tags produced by any strategy.
pub const MAX_TAGS: usize = 5;

/// Turns a report body into a [`Summary`]. Never fails.
pub trait Summarizer {
    fn summarize(&self, body: &str) -> impl Future<Output = Summary> + Send;
}

/// The summarization strategy chosen from configuration.
#[derive(Debug)]
pub enum AnySummarizer {
    Local(LocalSummarizer),
    Remote(RemoteSummarizer<OpenAiClient>),
}

impl AnySummarizer {
    /// Remote when an API key is configured, local otherwise.
    ///
    /// A client that cannot be built is logged and replaced by the local
    /// strategy, so this never fails.
    #[must_use]
    pub fn from_config(config: &LabConfig) -> Self {
        let local = LocalSummarizer::with_keywords(&config.summarizer.keywords);
        if !config.openai.is_configured() {
            tracing::debug!("no API key configured, using local summarizer");
            return Self::Local(local);
        }

        match OpenAiClient::new(&config.openai) {
            Ok(client) => {
                tracing::debug!(model = %client.model(), "using remote summarizer");
                Self::Remote(RemoteSummarizer::new(client, local))
            }
            Err(error) => {
                tracing::warn!(%error, "cannot build model client, using local summarizer");
                Self::Local(local)
            }
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl Summarizer for AnySummarizer {
    async fn summarize(&self, body: &str) -> Summary {
        match self {
            Self::Local(local) => local.summarize(body).await,
            Self::Remote(remote) => remote.summarize(body).await,
        }
    }
}
