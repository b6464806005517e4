//! Fixed section configuration and drafted section output.

use serde::Serialize;

const PLACEHOLDER: &str = "{summaries}";

/// A named prompt template with a single `{summaries}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: &'static str,
    pub template: &'static str,
}

impl SectionSpec {
    /// Substitute the bullet list of summaries into the template.
    pub fn fill(&self, summaries: &str) -> String {
        self.template.replacen(PLACEHOLDER, summaries, 1)
    }
}

/// Sections in display order.
pub const SECTIONS: [SectionSpec; 4] = [
    SectionSpec {
        name: "Introduction",
        template: "Write a detailed academic introduction (~300 words) for a literature review on the research topic covered by the following paper summaries.

Paper summaries:
{summaries}
",
    },
    SectionSpec {
        name: "Key Approaches and Findings",
        template: "Describe in detail (~400 words) the most important technical approaches, methodologies, and key findings from the following summaries.

Paper summaries:
{summaries}
",
    },
    SectionSpec {
        name: "Comparative Analysis",
        template: "Write a thorough comparative analysis (~400 words) of the research papers summarized below.

Paper summaries:
{summaries}
",
    },
    SectionSpec {
        name: "Gaps and Future Directions",
        template: "Write a comprehensive discussion (~300 words) about the gaps, limitations, and future research directions based on the paper summaries below.

Paper summaries:
{summaries}
",
    },
];

/// Generated prose for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSection {
    pub name: String,
    pub body: String,
}
