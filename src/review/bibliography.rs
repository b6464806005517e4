//! Bibliography entries derived from fetched papers.

use std::fmt;

use serde::Serialize;

use crate::data::PaperRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibEntry {
    /// 1-based position in fetch order.
    pub index: usize,
    pub authors: String,
    pub year: i32,
    pub title: String,
    pub url: String,
}

impl BibEntry {
    pub fn from_paper(index: usize, paper: &PaperRecord) -> Self {
        Self {
            index,
            authors: paper.authors.join(", "),
            year: paper.year,
            title: paper.title.trim().to_string(),
            url: paper.url.clone(),
        }
    }
}

impl fmt::Display for BibEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({}). *{}*. arXiv. {}",
            self.index, self.authors, self.year, self.title, self.url
        )
    }
}

/// One entry per paper, numbered from 1 in fetch order.
pub fn create_bibliography(papers: &[PaperRecord]) -> Vec<BibEntry> {
    papers
        .iter()
        .enumerate()
        .map(|(i, paper)| BibEntry::from_paper(i + 1, paper))
        .collect()
}
