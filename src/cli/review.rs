//! CLI entry-point for generating a review without the web UI.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api::types::ReviewDto, config::Settings, pipeline::ReviewPipeline};

/// Args for the `review` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Research topic, e.g. "AI in healthcare".
    #[arg(long)]
    pub topic: String,
    /// Print the JSON response body instead of markdown.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let pipeline = ReviewPipeline::from_settings(&settings).await?;
    let review = pipeline.run(&args.topic).await?;
    if args.json {
        let dto = ReviewDto::from(review);
        println!("{}", serde_json::to_string_pretty(&dto)?);
    } else {
        print!("{}", review.to_markdown());
    }
    Ok(())
}
