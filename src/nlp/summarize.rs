//! Abstract summarisation with a truncation fallback.

use tracing::warn;

use super::models::{LengthBounds, Summarizer};
use crate::config::{SUMMARY_FALLBACK_CHARS, SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH};

const BOUNDS: LengthBounds = LengthBounds {
    min: SUMMARY_MIN_LENGTH,
    max: SUMMARY_MAX_LENGTH,
};

/// Flatten an abstract onto one line before it is summarised.
pub fn normalize_abstract(abstract_text: &str) -> String {
    abstract_text.trim().replace('\n', " ")
}

/// Summarise one abstract. Never fails: any model error, or an empty
/// summary, degrades to the leading characters of the abstract.
pub async fn summarize_paper(summarizer: &dyn Summarizer, abstract_text: &str) -> String {
    match summarizer.summarize(abstract_text, BOUNDS).await {
        Ok(summary) if !summary.trim().is_empty() => summary.trim().to_string(),
        Ok(_) => {
            warn!("summarizer returned empty text; using truncated abstract");
            fallback(abstract_text)
        }
        Err(err) => {
            warn!(%err, "summarization failed; using truncated abstract");
            fallback(abstract_text)
        }
    }
}

fn fallback(abstract_text: &str) -> String {
    abstract_text.chars().take(SUMMARY_FALLBACK_CHARS).collect()
}

/// Render summaries as the bullet list substituted into section prompts.
pub fn bullet_list(summaries: &[String]) -> String {
    summaries
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n")
}
