//! Deterministic summarization of markdown report bodies.
//!
//! Reports are expected to use GitHub-style checklists:
//!
//! ```text
//! - [x] Built the RTL decoder module      <- completed
//! - [/] Timing closure on the FPGA build  <- in progress
//! - [ ] Debug the AXI handshake           <- in progress (pending)
//! ```

use lab_config::DEFAULT_KEYWORDS;
use lab_core::responses::Summary;

use crate::text::{non_blank_lines, truncate_chars};
use crate::{MAX_SUMMARY_CHARS, MAX_TAGS, Summarizer};

const COMPLETED_SHOWN: usize = 4;
const IN_PROGRESS_SHOWN: usize = 3;
const FALLBACK_LINES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Checkbox {
    Done,
    Open,
}

/// Keyword/checkbox heuristic summarizer. Needs no network and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSummarizer {
    keywords: Vec<String>,
}

impl Default for LocalSummarizer {
    fn default() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS)
    }
}

impl LocalSummarizer {
    /// Build a summarizer that tags with `keywords`, scanned in order.
    ///
    /// Keywords are trimmed and lowercased; blanks and repeats are dropped.
    #[must_use]
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
        }
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Summarize `body` synchronously.
    #[must_use]
    pub fn summarize_text(&self, body: &str) -> Summary {
        Summary {
            text: summary_text(body),
            tags: self.tags(body),
        }
    }

    /// Keywords found anywhere in `body` (case-insensitive), in keyword-list
    /// order, at most [`MAX_TAGS`].
    #[must_use]
    pub fn tags(&self, body: &str) -> Vec<String> {
        let lowered = body.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| lowered.contains(keyword.as_str()))
            .take(MAX_TAGS)
            .cloned()
            .collect()
    }
}

impl Summarizer for LocalSummarizer {
    async fn summarize(&self, body: &str) -> Summary {
        self.summarize_text(body)
    }
}

fn summary_text(body: &str) -> String {
    let lines = non_blank_lines(body);

    let mut completed: Vec<&str> = Vec::new();
    let mut in_progress: Vec<&str> = Vec::new();
    for line in &lines {
        let Some((state, item)) = checkbox_item(line) else {
            continue;
        };
        if !is_meaningful(item) {
            continue;
        }
        match state {
            Checkbox::Done => completed.push(item),
            Checkbox::Open => in_progress.push(item),
        }
    }

    let mut parts: Vec<String> = Vec::new();
    if !completed.is_empty() {
        let shown = completed[..completed.len().min(COMPLETED_SHOWN)].join("; ");
        parts.push(format!("Completed ({}): {shown}", completed.len()));
    }
    if !in_progress.is_empty() {
        let shown = in_progress[..in_progress.len().min(IN_PROGRESS_SHOWN)].join("; ");
        parts.push(format!("In progress: {shown}"));
    }

    let summary = if parts.is_empty() {
        let bullets: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| line.starts_with("- "))
            .take(FALLBACK_LINES)
            .collect();
        if bullets.is_empty() {
            lines
                .iter()
                .copied()
                .take(FALLBACK_LINES)
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            bullets.join("\n")
        }
    } else {
        parts.join(" | ")
    };

    truncate_chars(&summary, MAX_SUMMARY_CHARS).to_string()
}

/// Split a checklist line into its state and item text.
fn checkbox_item(line: &str) -> Option<(Checkbox, &str)> {
    let (state, rest) = if let Some(rest) = line.strip_prefix("- [x]") {
        (Checkbox::Done, rest)
    } else if let Some(rest) = line
        .strip_prefix("- [/]")
        .or_else(|| line.strip_prefix("- [ ]"))
    {
        (Checkbox::Open, rest)
    } else {
        return None;
    };
    Some((state, rest.trim().trim_matches('*').trim()))
}

/// Drops stray markers and emoji-only items.
fn is_meaningful(item: &str) -> bool {
    item.split_whitespace().count() >= 2 || item.chars().count() > 20
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn summarize(body: &str) -> Summary {
        LocalSummarizer::default().summarize_text(body)
    }

    #[test]
    fn checklist_report_lists_completed_and_in_progress() {
        let summary =
            summarize("- [x] Built the RTL decoder module\n- [ ] Debug the FPGA timing");
        assert_eq!(
            summary.text,
            "Completed (1): Built the RTL decoder module | In progress: Debug the FPGA timing"
        );
        assert_eq!(summary.tags, ["rtl", "debug"]);
    }

    #[test]
    fn completed_list_shows_first_four_but_counts_all() {
        let body = (1..=6)
            .map(|i| format!("- [x] finished item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let summary = summarize(&body);
        assert_eq!(
            summary.text,
            "Completed (6): finished item 1; finished item 2; finished item 3; finished item 4"
        );
    }

    #[test]
    fn in_progress_list_shows_first_three() {
        let body = "- [/] step one\n- [ ] step two\n- [/] step three\n- [ ] step four";
        assert_eq!(
            summarize(body).text,
            "In progress: step one; step two; step three"
        );
    }

    #[rstest]
    #[case("- [x] ✅")]
    #[case("- [x] done")]
    #[case("- [ ] **wip**")]
    fn noise_items_are_dropped(#[case] line: &str) {
        let summary = summarize(line);
        assert!(!summary.text.starts_with("Completed"), "{}", summary.text);
        assert!(!summary.text.starts_with("In progress"), "{}", summary.text);
    }

    #[test]
    fn long_single_word_item_is_kept() {
        let summary = summarize("- [x] Supercalifragilisticexpialidocious");
        assert_eq!(
            summary.text,
            "Completed (1): Supercalifragilisticexpialidocious"
        );
    }

    #[test]
    fn bold_markers_are_stripped() {
        let summary = summarize("- [x] **Ran the full simulation**");
        assert_eq!(summary.text, "Completed (1): Ran the full simulation");
    }

    #[test]
    fn falls_back_to_bullets() {
        let body = "# Daily report\n- met with advisor\n- read two papers\nplain note";
        assert_eq!(summarize(body).text, "- met with advisor\n- read two papers");
    }

    #[test]
    fn falls_back_to_first_five_lines() {
        let body = "one\n\ntwo\nthree\nfour\nfive\nsix";
        assert_eq!(summarize(body).text, "one\ntwo\nthree\nfour\nfive");
    }

    #[test]
    fn empty_body_gives_empty_summary() {
        let summary = summarize("   \n\n");
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn summary_is_capped_at_1200_chars() {
        let body = (0..50)
            .map(|i| format!("- [x] {} item {i}", "long words here".repeat(5)))
            .collect::<Vec<_>>()
            .join("\n");
        let long_line = format!("{}\n", "word ".repeat(400));
        for body in [body, long_line] {
            let summary = summarize(&body);
            assert!(summary.text.chars().count() <= MAX_SUMMARY_CHARS);
        }
    }

    #[test]
    fn tags_follow_keyword_order_and_are_unique() {
        let body = "MATLAB script, then DEBUG; more debug. Vivado build of the RTL.";
        assert_eq!(summarize(body).tags, ["rtl", "debug", "vivado", "matlab"]);
    }

    #[test]
    fn tags_are_capped_at_five() {
        let summarizer = LocalSummarizer::with_keywords(["a", "b", "c", "d", "e", "f"]);
        assert_eq!(summarizer.tags("abcdef"), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn custom_keywords_are_normalized() {
        let summarizer = LocalSummarizer::with_keywords([" FPGA ", "fpga", "", "Timing"]);
        assert_eq!(summarizer.keywords(), ["fpga", "timing"]);
        assert_eq!(summarizer.tags("fpga timing report"), ["fpga", "timing"]);
    }

    #[tokio::test]
    async fn trait_impl_matches_sync_path() {
        let summarizer = LocalSummarizer::default();
        let body = "- [x] Wrote the simulation testbench";
        assert_eq!(summarizer.summarize(body).await, summarizer.summarize_text(body));
    }
}
