//! Model-backed summarization with a deterministic fallback.
//!
//! The model is asked for five `- ` bullets under `SUMMARY:` and a
//! `TAGS: a, b, c` line. Anything it gets wrong degrades gracefully: missing
//! bullets fall back to the first lines of the output, missing tags fall back
//! to keyword tags, and empty output or any error falls back to
//! [`LocalSummarizer`] entirely.

use std::future::Future;

use lab_core::responses::Summary;

use crate::error::SummarizeError;
use crate::local::LocalSummarizer;
use crate::text::{non_blank_lines, truncate_chars};
use crate::{MAX_SUMMARY_CHARS, MAX_TAGS, Summarizer};

/// Instruction sent as the system prompt.
pub const SYSTEM_PROMPT: &str = "You summarize research logs. Return plain text only.\n\
Format:\n\
SUMMARY:\n\
- line 1\n- line 2\n- line 3\n- line 4\n- line 5\n\
TAGS: tag1, tag2, tag3";

/// Longest body prefix sent to the model, in characters.
pub const MAX_INPUT_CHARS: usize = 15_000;

/// Output token budget requested from the model.
pub const MAX_OUTPUT_TOKENS: u32 = 300;

const SUMMARY_LINES: usize = 5;

/// A text-generation capability, such as a hosted language model.
pub trait TextGenerator {
    /// Generate a completion for `user_text` under `system_prompt`.
    fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
        max_tokens: u32,
    ) -> impl Future<Output = Result<String, SummarizeError>> + Send;
}

/// Summarizer that asks a [`TextGenerator`] first and falls back to a
/// [`LocalSummarizer`].
#[derive(Debug, Clone)]
pub struct RemoteSummarizer<G> {
    generator: G,
    fallback: LocalSummarizer,
}

impl<G: TextGenerator + Sync> RemoteSummarizer<G> {
    #[must_use]
    pub const fn new(generator: G, fallback: LocalSummarizer) -> Self {
        Self {
            generator,
            fallback,
        }
    }

    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: TextGenerator + Sync> Summarizer for RemoteSummarizer<G> {
    async fn summarize(&self, body: &str) -> Summary {
        let user_text = truncate_chars(body, MAX_INPUT_CHARS);
        let output = match self
            .generator
            .generate(SYSTEM_PROMPT, user_text, MAX_OUTPUT_TOKENS)
            .await
        {
            Ok(output) => output,
            Err(error) => {
                tracing::warn!(%error, "remote summarization failed, using local summary");
                return self.fallback.summarize_text(body);
            }
        };

        let Some(parsed) = parse_model_output(&output) else {
            tracing::warn!("remote summarization returned no text, using local summary");
            return self.fallback.summarize_text(body);
        };

        let tags = if parsed.tags.is_empty() {
            tracing::debug!("model output had no tags, using keyword tags");
            self.fallback.tags(body)
        } else {
            parsed.tags
        };
        Summary {
            text: parsed.text,
            tags,
        }
    }
}

/// Interpret a model response. Returns `None` for blank output.
///
/// The returned tags may be empty; the caller decides how to fill them.
#[must_use]
pub fn parse_model_output(output: &str) -> Option<Summary> {
    let lines = non_blank_lines(output);
    if lines.is_empty() {
        return None;
    }

    let mut summary_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| line.starts_with("- "))
        .take(SUMMARY_LINES)
        .collect();
    if summary_lines.is_empty() {
        summary_lines = lines.iter().copied().take(SUMMARY_LINES).collect();
    }
    let text = truncate_chars(&summary_lines.join("\n"), MAX_SUMMARY_CHARS).to_string();

    let tags = lines
        .iter()
        .find(|line| line.to_lowercase().starts_with("tags:"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, raw)| {
            raw.split(',')
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .take(MAX_TAGS)
                .collect()
        })
        .unwrap_or_default();

    Some(Summary { text, tags })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Generator returning a canned result and recording what it was sent.
    struct FakeGenerator {
        reply: Result<String, fn() -> SummarizeError>,
        seen: Mutex<Vec<(String, u32)>>,
    }

    impl FakeGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(make_error: fn() -> SummarizeError) -> Self {
            Self {
                reply: Err(make_error),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for FakeGenerator {
        async fn generate(
            &self,
            system_prompt: &str,
            user_text: &str,
            max_tokens: u32,
        ) -> Result<String, SummarizeError> {
            assert_eq!(system_prompt, SYSTEM_PROMPT);
            self.seen
                .lock()
                .unwrap()
                .push((user_text.to_string(), max_tokens));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make_error) => Err(make_error()),
            }
        }
    }

    const REPORT: &str = "- [x] Built the RTL decoder module\n- [ ] Debug the FPGA timing";

    fn remote(generator: FakeGenerator) -> RemoteSummarizer<FakeGenerator> {
        RemoteSummarizer::new(generator, LocalSummarizer::default())
    }

    #[tokio::test]
    async fn uses_model_bullets_and_tags() {
        let summarizer = remote(FakeGenerator::replying(
            "SUMMARY:\n- Decoder RTL done\n- Timing still failing\n\nTAGS: FPGA, Timing , rtl",
        ));
        let summary = summarizer.summarize(REPORT).await;
        assert_eq!(summary.text, "- Decoder RTL done\n- Timing still failing");
        assert_eq!(summary.tags, ["fpga", "timing", "rtl"]);
    }

    #[tokio::test]
    async fn sends_truncated_body_and_token_budget() {
        let generator = FakeGenerator::replying("- ok\nTAGS: x");
        let summarizer = remote(generator);
        let body = "é".repeat(MAX_INPUT_CHARS + 10);
        summarizer.summarize(&body).await;

        let seen = summarizer.generator().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.chars().count(), MAX_INPUT_CHARS);
        assert_eq!(seen[0].1, MAX_OUTPUT_TOKENS);
    }

    #[tokio::test]
    async fn missing_tags_fall_back_to_keywords() {
        let summarizer = remote(FakeGenerator::replying("- Decoder RTL done"));
        let summary = summarizer.summarize(REPORT).await;
        assert_eq!(summary.text, "- Decoder RTL done");
        assert_eq!(summary.tags, ["rtl", "debug"]);
    }

    #[tokio::test]
    async fn empty_tag_line_falls_back_to_keywords() {
        let summarizer = remote(FakeGenerator::replying("- Decoder RTL done\nTAGS: , ,"));
        assert_eq!(summarizer.summarize(REPORT).await.tags, ["rtl", "debug"]);
    }

    #[tokio::test]
    async fn blank_output_falls_back_entirely() {
        let summarizer = remote(FakeGenerator::replying("  \n \n"));
        let summary = summarizer.summarize(REPORT).await;
        assert_eq!(summary, LocalSummarizer::default().summarize_text(REPORT));
    }

    #[tokio::test]
    async fn generator_error_falls_back_entirely() {
        let summarizer = remote(FakeGenerator::failing(|| SummarizeError::Api {
            status: 500,
            message: "boom".into(),
        }));
        let summary = summarizer.summarize(REPORT).await;
        assert_eq!(summary, LocalSummarizer::default().summarize_text(REPORT));
    }

    #[test]
    fn parse_without_bullets_takes_first_five_lines() {
        let parsed = parse_model_output("SUMMARY:\none\ntwo\nthree\nfour\nfive\nsix").unwrap();
        assert_eq!(parsed.text, "SUMMARY:\none\ntwo\nthree\nfour");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn parse_caps_bullets_and_tags() {
        let output = "- a\n- b\n- c\n- d\n- e\n- f\ntags: one, two, three, four, five, six";
        let parsed = parse_model_output(output).unwrap();
        assert_eq!(parsed.text, "- a\n- b\n- c\n- d\n- e");
        assert_eq!(parsed.tags, ["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn parse_uses_first_tag_line_only() {
        let parsed = parse_model_output("- a\nTags: first\nTAGS: second").unwrap();
        assert_eq!(parsed.tags, ["first"]);
    }

    #[test]
    fn parse_blank_is_none() {
        assert!(parse_model_output("").is_none());
        assert!(parse_model_output("\n  \n").is_none());
    }

    #[test]
    fn parse_truncates_summary() {
        let output = format!("- {}", "x".repeat(2000));
        let parsed = parse_model_output(&output).unwrap();
        assert_eq!(parsed.text.chars().count(), MAX_SUMMARY_CHARS);
    }
}
