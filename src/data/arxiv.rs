//! arXiv search client backed by the public Atom query API.

use async_trait::async_trait;
use chrono::{DateTime, Datelike};
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};
use urlencoding::encode;

use super::{FetchError, PaperRecord, PaperSource};
use crate::config::Settings;

/// Relevance-ranked arXiv search.
pub struct ArxivClient {
    client: Client,
    api_url: String,
}

impl ArxivClient {
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(settings.user_agent())
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            api_url: settings.arxiv_api_url.clone(),
        })
    }

    fn query_url(&self, topic: &str, limit: usize) -> String {
        format!(
            "{base}?search_query=all:{term}&start=0&max_results={limit}&sortBy=relevance&sortOrder=descending",
            base = self.api_url,
            term = encode(topic.trim()),
        )
    }
}

#[async_trait]
impl PaperSource for ArxivClient {
    fn name(&self) -> &str {
        "arxiv"
    }

    async fn fetch(&self, topic: &str, limit: usize) -> Result<Vec<PaperRecord>, FetchError> {
        let url = self.query_url(topic, limit);
        debug!(%url, "querying arxiv");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let xml = resp.text().await?;
        let mut papers = parse_atom_feed(&xml)?;
        papers.truncate(limit);
        info!(%topic, count = papers.len(), "fetched arxiv papers");
        Ok(papers)
    }
}

/// Parse an arXiv Atom response into paper records, preserving feed order.
pub fn parse_atom_feed(xml: &str) -> Result<Vec<PaperRecord>, FetchError> {
    let feed: AtomFeed = from_str(xml).map_err(|e| FetchError::Parse(e.to_string()))?;
    let mut papers = Vec::with_capacity(feed.entries.len());
    for entry in feed.entries {
        if entry.id.contains("/api/errors") {
            return Err(FetchError::Api(collapse_whitespace(&entry.summary)));
        }
        match entry.into_record() {
            Some(record) => papers.push(record),
            None => warn!("skipping arxiv entry without a usable publication year"),
        }
    }
    Ok(papers)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Identifier after `/abs/`, keeping archive prefixes such as `cond-mat/0102536v1`.
fn arxiv_id(url: &str) -> &str {
    url.split_once("/abs/")
        .map(|(_, id)| id)
        .unwrap_or_else(|| url.rsplit('/').next().unwrap_or(url))
}

fn publication_year(published: &str) -> Option<i32> {
    let published = published.trim();
    DateTime::parse_from_rfc3339(published)
        .map(|ts| ts.year())
        .ok()
        .or_else(|| published.get(..4).and_then(|y| y.parse().ok()))
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    published: String,
    #[serde(rename = "author", default)]
    authors: Vec<AtomAuthor>,
}

#[derive(Debug, Deserialize)]
struct AtomAuthor {
    name: String,
}

impl AtomEntry {
    fn into_record(self) -> Option<PaperRecord> {
        let year = publication_year(&self.published)?;
        let url = self.id.trim().to_string();
        let source_id = arxiv_id(&url).to_string();
        Some(PaperRecord {
            title: collapse_whitespace(&self.title),
            authors: self
                .authors
                .into_iter()
                .map(|a| a.name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            year,
            abstract_text: self.summary.trim().to_string(),
            url,
            source_id,
        })
    }
}
