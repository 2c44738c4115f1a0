//! Local summarizer configuration.

use serde::{Deserialize, Serialize};

/// Keywords scanned for in report bodies when no remote tags are available.
pub const DEFAULT_KEYWORDS: [&str; 5] = ["rtl", "simulation", "debug", "vivado", "matlab"];

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizerConfig {
    /// Tag keywords, matched as lowercase substrings in list order.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}
