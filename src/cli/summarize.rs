//! CLI entry-point for summarising one abstract.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    nlp::{summarize::normalize_abstract, summarize_paper, ModelHub},
};

/// Args for the `summarize` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Abstract text to summarise.
    #[arg(long)]
    pub text: String,
}

#[instrument(skip(settings, args))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let models = ModelHub::load(&settings).await?;
    let text = normalize_abstract(&args.text);
    let summary = summarize_paper(models.summarizer.as_ref(), &text).await;
    println!("{summary}");
    Ok(())
}
