//! Command-line interface wiring for lit-review.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod fetch;
pub mod review;
pub mod serve;
pub mod summarize;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Literature review generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Review(args) => review::run(args, settings).await,
            Commands::Fetch(args) => fetch::run(args, settings).await,
            Commands::Summarize(args) => summarize::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the review form and JSON API.
    Serve(serve::Args),
    /// Generate a full review for a topic and print it.
    Review(review::Args),
    /// List the papers a review would cite.
    Fetch(fetch::Args),
    /// Summarise a single abstract.
    Summarize(summarize::Args),
}
