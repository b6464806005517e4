//! Literature review drafting: arXiv search, abstract summaries, model-written sections.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
pub mod pipeline;
pub mod review;
pub mod ui;
