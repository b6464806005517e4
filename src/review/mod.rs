//! Review assembly: section configuration, bibliography and final document.

pub mod bibliography;
pub mod sections;

use serde::Serialize;

use crate::data::PaperRecord;
use bibliography::{create_bibliography, BibEntry};
use sections::GeneratedSection;

/// Finished literature review, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub topic: String,
    pub sections: Vec<GeneratedSection>,
    pub bibliography: Vec<BibEntry>,
}

impl Review {
    /// Render as markdown: each section under a `###` heading, then the bibliography.
    pub fn to_markdown(&self) -> String {
        let body = self
            .sections
            .iter()
            .map(|s| format!("### {}\n{}", s.name, s.body))
            .collect::<Vec<_>>()
            .join("\n\n");
        let bibliography = self
            .bibliography
            .iter()
            .map(BibEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        format!("{body}\n\n## Bibliography\n{bibliography}\n")
    }
}

/// Pair the drafted sections with a bibliography built from `papers`.
pub fn assemble(topic: &str, sections: Vec<GeneratedSection>, papers: &[PaperRecord]) -> Review {
    Review {
        topic: topic.trim().to_string(),
        sections,
        bibliography: create_bibliography(papers),
    }
}
