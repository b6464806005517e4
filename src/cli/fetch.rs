//! CLI entry-point for inspecting search results.

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::{Settings, NUM_PAPERS},
    data::{arxiv::ArxivClient, PaperSource},
};

/// Args for the `fetch` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Research topic to search for.
    #[arg(long)]
    pub topic: String,
    /// Number of papers, at most the review cap.
    #[arg(long, default_value_t = NUM_PAPERS)]
    pub limit: usize,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let topic = args.topic.trim();
    if topic.is_empty() {
        bail!("Please enter a topic.");
    }
    let limit = args.limit.clamp(1, NUM_PAPERS);
    let client = ArxivClient::new(&settings)?;
    let papers = client
        .fetch(topic, limit)
        .await
        .with_context(|| format!("search arxiv for {topic:?}"))?;
    info!(count = papers.len(), "papers fetched");
    println!("{}", serde_json::to_string_pretty(&papers)?);
    Ok(())
}
