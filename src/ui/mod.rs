//! Server-rendered HTML page for the review form and results.

use askama::Template;

use crate::{pipeline::ReviewError, review::Review};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    topic: &'a str,
    warning: Option<String>,
    error: Option<String>,
    review: Option<&'a Review>,
}

/// Render the page. `outcome` is `None` before the first submission.
///
/// An empty topic is shown as a warning; every other failure as an error.
pub fn render_page(
    topic: &str,
    outcome: Option<&Result<Review, ReviewError>>,
) -> Result<String, askama::Error> {
    let mut page = IndexPage {
        topic,
        warning: None,
        error: None,
        review: None,
    };
    match outcome {
        Some(Ok(review)) => page.review = Some(review),
        Some(Err(ReviewError::EmptyTopic)) => page.warning = Some(ReviewError::EmptyTopic.to_string()),
        Some(Err(err)) => page.error = Some(err.to_string()),
        None => {}
    }
    page.render()
}
