//! CLI entry-point for the review web page and JSON API.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{api, config::Settings};

/// Load the models, then serve `GET /`, `POST /review` and `POST /api/review`.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Listening port for the review page.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Interface to bind; use 0.0.0.0 to expose the page on the network.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    info!(
        summarizer = %settings.summarizer_model,
        generator = %settings.generator_model,
        "starting review server"
    );
    api::serve(settings, args.host, args.port).await
}
