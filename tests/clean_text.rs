use lit_review::nlp::clean_text;
use proptest::prelude::*;

#[test]
fn collapses_blank_lines_and_spaces() {
    let raw = "  Deep learning   models\n\n\n\nimprove triage.\t\tThey scale.  ";
    assert_eq!(clean_text(raw), "Deep learning models improve triage. They scale.");
}

#[test]
fn single_newlines_survive() {
    assert_eq!(clean_text("first line\nsecond line"), "first line\nsecond line");
}

#[test]
fn whitespace_only_becomes_empty() {
    assert_eq!(clean_text(" \n\n\t "), "");
}

proptest! {
    #[test]
    fn clean_text_is_idempotent(raw in "[a-z .\\n\\t]{0,200}") {
        let once = clean_text(&raw);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn cleaned_text_has_no_whitespace_runs(raw in "\\PC{0,200}") {
        let cleaned = clean_text(&raw);
        let chars: Vec<char> = cleaned.chars().collect();
        prop_assert!(chars.windows(2).all(|w| !(w[0].is_whitespace() && w[1].is_whitespace())));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
