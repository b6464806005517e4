#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use lit_review::{
    data::{FetchError, PaperRecord, PaperSource},
    nlp::{
        models::{LengthBounds, ModelError, Summarizer, TextGenerator},
        tokenize::PromptTokenizer,
        ModelHub,
    },
    pipeline::ReviewPipeline,
};

pub fn paper(n: usize) -> PaperRecord {
    PaperRecord {
        title: format!("Paper {n} on clinical machine learning"),
        authors: vec![format!("Author {n}A"), format!("Author {n}B")],
        year: 2020 + n as i32,
        abstract_text: format!("Abstract {n}.\nWe study model {n} on hospital data."),
        url: format!("http://arxiv.org/abs/2301.0000{n}v1"),
        source_id: format!("2301.0000{n}v1"),
    }
}

pub fn papers(count: usize) -> Vec<PaperRecord> {
    (1..=count).map(paper).collect()
}

#[derive(Default)]
pub struct FakeSource {
    pub papers: Vec<PaperRecord>,
    pub unavailable: bool,
    pub calls: AtomicUsize,
}

impl FakeSource {
    pub fn with(papers: Vec<PaperRecord>) -> Self {
        Self {
            papers,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaperSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch(&self, _topic: &str, limit: usize) -> Result<Vec<PaperRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(FetchError::Status(503));
        }
        Ok(self.papers.iter().take(limit).cloned().collect())
    }
}

/// Summarises by echoing the first sentence, or fails every call.
#[derive(Default)]
pub struct FakeSummarizer {
    pub failing: bool,
    pub calls: AtomicUsize,
}

impl FakeSummarizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, text: &str, _bounds: LengthBounds) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ModelError::Api {
                status: 500,
                message: "model crashed".into(),
            });
        }
        let first = text.split('.').next().unwrap_or_default();
        Ok(format!("Summary of {first}"))
    }
}

/// Records every prompt; optionally fails on the n-th call (0-based).
#[derive(Default)]
pub struct FakeGenerator {
    pub fail_on: Option<usize>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str, _max_new_tokens: usize) -> Result<String, ModelError> {
        let mut prompts = self.prompts.lock().unwrap();
        let call = prompts.len();
        prompts.push(prompt.to_string());
        if self.fail_on == Some(call) {
            return Err(ModelError::EmptyOutput);
        }
        Ok(format!("  Generated   text {call}.\n\n\n\nSecond   paragraph.  "))
    }
}

pub struct Harness {
    pub source: Arc<FakeSource>,
    pub summarizer: Arc<FakeSummarizer>,
    pub generator: Arc<FakeGenerator>,
    pub pipeline: ReviewPipeline,
}

pub fn harness(source: FakeSource, summarizer: FakeSummarizer, generator: FakeGenerator) -> Harness {
    let source = Arc::new(source);
    let summarizer = Arc::new(summarizer);
    let generator = Arc::new(generator);
    let models = ModelHub::new(
        summarizer.clone(),
        generator.clone(),
        PromptTokenizer::Whitespace,
    );
    let pipeline = ReviewPipeline::new(source.clone(), Arc::new(models));
    Harness {
        source,
        summarizer,
        generator,
        pipeline,
    }
}
