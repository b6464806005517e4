mod common;

use common::{harness, paper, papers, FakeGenerator, FakeSource, FakeSummarizer};
use lit_review::{
    config::{GENERATION_MAX_INPUT_TOKENS, SUMMARY_FALLBACK_CHARS},
    pipeline::ReviewError,
    review::sections::SECTIONS,
};

fn bullet_lines(prompt: &str) -> usize {
    prompt.lines().filter(|l| l.starts_with("- ")).count()
}

#[tokio::test]
async fn four_papers_produce_four_sections_and_entries() {
    let h = harness(
        FakeSource::with(papers(4)),
        FakeSummarizer::default(),
        FakeGenerator::default(),
    );

    let review = h.pipeline.run("AI in healthcare").await.expect("review");

    assert_eq!(h.summarizer.calls(), 4);
    let names: Vec<_> = review.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Introduction",
            "Key Approaches and Findings",
            "Comparative Analysis",
            "Gaps and Future Directions"
        ]
    );
    assert_eq!(review.sections[0].body, "Generated text 0. Second paragraph.");

    let indices: Vec<_> = review.bibliography.iter().map(|b| b.index).collect();
    assert_eq!(indices, [1, 2, 3, 4]);
    for (entry, paper) in review.bibliography.iter().zip(papers(4)) {
        assert_eq!(entry.title, paper.title);
    }

    let prompts = h.generator.prompts();
    assert_eq!(prompts.len(), SECTIONS.len());
    for prompt in &prompts {
        assert_eq!(bullet_lines(prompt), review.bibliography.len());
        assert!(prompt.contains("- Summary of Abstract 1\n- Summary of Abstract 2"));
    }

    let markdown = review.to_markdown();
    assert_eq!(markdown.matches("### ").count(), 4);
    assert!(markdown.contains("## Bibliography\n1. Author 1A, Author 1B (2021)."));
}

#[tokio::test]
async fn whitespace_topic_never_reaches_the_source() {
    let h = harness(
        FakeSource::with(papers(4)),
        FakeSummarizer::default(),
        FakeGenerator::default(),
    );

    let err = h.pipeline.run("   ").await.unwrap_err();

    assert!(matches!(err, ReviewError::EmptyTopic));
    assert_eq!(err.to_string(), "Please enter a topic.");
    assert_eq!(h.source.calls(), 0);
}

#[tokio::test]
async fn no_matches_stops_before_summarizing() {
    let h = harness(
        FakeSource::with(Vec::new()),
        FakeSummarizer::default(),
        FakeGenerator::default(),
    );

    let err = h.pipeline.run("zzqx unmatched").await.unwrap_err();

    assert!(matches!(err, ReviewError::NoResultsFound));
    assert_eq!(err.to_string(), "No relevant papers found.");
    assert_eq!(h.source.calls(), 1);
    assert_eq!(h.summarizer.calls(), 0);
    assert!(h.generator.prompts().is_empty());
}

#[tokio::test]
async fn unavailable_search_is_fatal() {
    let source = FakeSource {
        unavailable: true,
        ..Default::default()
    };
    let h = harness(source, FakeSummarizer::default(), FakeGenerator::default());

    let err = h.pipeline.run("graph neural networks").await.unwrap_err();

    assert!(matches!(err, ReviewError::FetchServiceFailure(_)));
    assert_eq!(h.summarizer.calls(), 0);
}

#[tokio::test]
async fn summarizer_failure_falls_back_to_truncated_abstract() {
    let mut long = paper(1);
    long.abstract_text = "x".repeat(SUMMARY_FALLBACK_CHARS + 50);
    let summarizer = FakeSummarizer {
        failing: true,
        ..Default::default()
    };
    let h = harness(
        FakeSource::with(vec![long]),
        summarizer,
        FakeGenerator::default(),
    );

    let review = h.pipeline.run("protein folding").await.expect("review");

    assert_eq!(review.sections.len(), 4);
    let expected = format!("- {}\n", "x".repeat(SUMMARY_FALLBACK_CHARS));
    for prompt in h.generator.prompts() {
        assert!(prompt.contains(&expected));
        assert!(!prompt.contains(&"x".repeat(SUMMARY_FALLBACK_CHARS + 1)));
    }
}

#[tokio::test]
async fn generation_failure_aborts_whole_review() {
    let generator = FakeGenerator {
        fail_on: Some(2),
        ..Default::default()
    };
    let h = harness(
        FakeSource::with(papers(3)),
        FakeSummarizer::default(),
        generator,
    );

    let err = h.pipeline.run("robotics").await.unwrap_err();

    match err {
        ReviewError::GenerationFailure { section, .. } => {
            assert_eq!(section, "Comparative Analysis")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(h.generator.prompts().len(), 3);
}

#[tokio::test]
async fn oversized_prompts_are_truncated_silently() {
    let mut wordy = paper(1);
    // No full stop, so the fake summary echoes every word.
    wordy.abstract_text = "token ".repeat(4 * GENERATION_MAX_INPUT_TOKENS);
    let mut source_papers = vec![wordy];
    source_papers.extend((2..=4).map(paper));
    let h = harness(
        FakeSource::with(source_papers),
        FakeSummarizer::default(),
        FakeGenerator::default(),
    );

    let review = h.pipeline.run("long inputs").await.expect("review");

    assert_eq!(review.bibliography.len(), 4);
    for prompt in h.generator.prompts() {
        assert_eq!(prompt.split_whitespace().count(), GENERATION_MAX_INPUT_TOKENS);
        assert!(!prompt.contains("Abstract 4"));
    }
}
