//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::review::{sections::GeneratedSection, Review};

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewDto {
    pub topic: String,
    pub sections: Vec<GeneratedSection>,
    pub bibliography: Vec<String>,
    pub markdown: String,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        let markdown = review.to_markdown();
        ReviewDto {
            bibliography: review.bibliography.iter().map(ToString::to_string).collect(),
            topic: review.topic,
            sections: review.sections,
            markdown,
        }
    }
}
