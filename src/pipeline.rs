//! Linear review pipeline: fetch, summarise, draft, assemble.

use std::{fmt, sync::Arc};

use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    config::{Settings, NUM_PAPERS},
    data::{arxiv::ArxivClient, FetchError, PaperSource},
    nlp::{
        draft_section,
        models::{ModelError, ModelHub},
        summarize::{bullet_list, normalize_abstract},
        summarize_paper,
    },
    review::{assemble, sections::SECTIONS, Review},
};

/// Failures that stop a review. Summariser errors never reach this level.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Please enter a topic.")]
    EmptyTopic,
    #[error("No relevant papers found.")]
    NoResultsFound,
    #[error("paper search unavailable: {0}")]
    FetchServiceFailure(#[from] FetchError),
    #[error("failed to generate section \"{section}\": {source}")]
    GenerationFailure {
        section: String,
        #[source]
        source: ModelError,
    },
}

/// Pipeline progress, logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Summarizing,
    Drafting,
    Assembling,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Summarizing => "summarizing",
            Self::Drafting => "drafting",
            Self::Assembling => "assembling",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Paper source plus loaded models; shared across sequential requests.
pub struct ReviewPipeline {
    source: Arc<dyn PaperSource>,
    models: Arc<ModelHub>,
}

impl ReviewPipeline {
    pub fn new(source: Arc<dyn PaperSource>, models: Arc<ModelHub>) -> Self {
        Self { source, models }
    }

    /// Build the arXiv client and load model handles once.
    pub async fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let source = Arc::new(ArxivClient::new(settings)?);
        let models = Arc::new(ModelHub::load(settings).await?);
        Ok(Self::new(source, models))
    }

    /// Run the whole review for `topic`; no partial output on failure.
    #[instrument(skip(self))]
    pub async fn run(&self, topic: &str) -> Result<Review, ReviewError> {
        info!(stage = %Stage::Idle, "review requested");
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ReviewError::EmptyTopic);
        }

        info!(stage = %Stage::Fetching, source = self.source.name(), "fetching papers");
        let papers = self.source.fetch(topic, NUM_PAPERS).await?;
        if papers.is_empty() {
            return Err(ReviewError::NoResultsFound);
        }

        info!(stage = %Stage::Summarizing, papers = papers.len(), "summarizing abstracts");
        let mut summaries = Vec::with_capacity(papers.len());
        for paper in &papers {
            let abstract_text = normalize_abstract(&paper.abstract_text);
            summaries.push(summarize_paper(self.models.summarizer.as_ref(), &abstract_text).await);
        }
        let summary_text = bullet_list(&summaries);

        info!(stage = %Stage::Drafting, sections = SECTIONS.len(), "drafting sections");
        let mut sections = Vec::with_capacity(SECTIONS.len());
        for spec in &SECTIONS {
            let section = draft_section(&self.models, spec, &summary_text)
                .await
                .map_err(|source| ReviewError::GenerationFailure {
                    section: spec.name.to_string(),
                    source,
                })?;
            sections.push(section);
        }

        info!(stage = %Stage::Assembling, "assembling review");
        let review = assemble(topic, sections, &papers);
        info!(stage = %Stage::Done, entries = review.bibliography.len(), "review complete");
        Ok(review)
    }
}
