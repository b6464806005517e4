//! Whitespace normalisation for generated prose.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Collapse newline runs to a blank line, then any whitespace run to one space, then trim.
///
/// Idempotent: a second pass finds no runs left to collapse.
pub fn clean_text(text: &str) -> String {
    let text = BLANK_LINES.replace_all(text, "\n\n");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
