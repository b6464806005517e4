//! Section drafting with the sequence-to-sequence generator.

use tracing::{debug, instrument};

use super::{clean::clean_text, models::ModelError, models::ModelHub};
use crate::{
    config::{GENERATION_MAX_INPUT_TOKENS, GENERATION_MAX_NEW_TOKENS},
    review::sections::{GeneratedSection, SectionSpec},
};

/// Fill the section template, generate its prose and tidy the whitespace.
///
/// Generation errors are returned as-is; there is no retry.
#[instrument(skip(models, spec, summaries), fields(section = spec.name))]
pub async fn draft_section(
    models: &ModelHub,
    spec: &SectionSpec,
    summaries: &str,
) -> Result<GeneratedSection, ModelError> {
    let prompt = spec.fill(summaries);
    let prompt = models
        .tokenizer
        .truncate(&prompt, GENERATION_MAX_INPUT_TOKENS)?;
    let raw = models
        .generator
        .generate(&prompt, GENERATION_MAX_NEW_TOKENS)
        .await?;
    let body = clean_text(&raw);
    debug!(chars = body.chars().count(), "section drafted");
    Ok(GeneratedSection {
        name: spec.name.to_string(),
        body,
    })
}
