//! Paper search layer.

pub mod arxiv;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A paper as returned by the search service, in relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub abstract_text: String,
    /// Canonical landing page, e.g. `http://arxiv.org/abs/2301.12345v1`.
    pub url: String,
    /// Identifier within the source, e.g. `2301.12345v1`.
    pub source_id: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("paper search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("paper search returned HTTP {0}")]
    Status(u16),
    #[error("malformed search response: {0}")]
    Parse(String),
    #[error("paper search rejected the query: {0}")]
    Api(String),
}

/// External relevance-ranked paper index.
///
/// A topic with no matches yields `Ok(vec![])`; one attempt is made per call.
#[async_trait]
pub trait PaperSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, topic: &str, limit: usize) -> Result<Vec<PaperRecord>, FetchError>;
}
