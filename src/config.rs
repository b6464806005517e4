//! Runtime configuration utilities for lit-review.

use std::env;

use serde::Deserialize;

/// Papers fetched per review.
pub const NUM_PAPERS: usize = 4;
/// Lower bound, in tokens, for each abstract summary.
pub const SUMMARY_MIN_LENGTH: usize = 30;
/// Upper bound, in tokens, for each abstract summary.
pub const SUMMARY_MAX_LENGTH: usize = 100;
/// Characters of raw abstract kept when summarization fails.
pub const SUMMARY_FALLBACK_CHARS: usize = 300;
/// Prompt tokens passed to the generator; anything past this is dropped.
pub const GENERATION_MAX_INPUT_TOKENS: usize = 1024;
/// New tokens the generator may produce per section.
pub const GENERATION_MAX_NEW_TOKENS: usize = 700;

const DEFAULT_ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";
const DEFAULT_HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_SUMMARIZER_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
const DEFAULT_GENERATOR_MODEL: &str = "MBZUAI/LaMini-Flan-T5-783M";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// arXiv Atom query endpoint.
    pub arxiv_api_url: String,
    /// Base URL of the hosted inference API; the model id is appended.
    pub hf_inference_url: String,
    /// Bearer token for the inference API.
    pub hf_api_token: Option<String>,
    /// Model id used to summarise abstracts.
    pub summarizer_model: String,
    /// Sequence-to-sequence model id used to draft sections.
    pub generator_model: String,
    /// Contact address advertised in the User-Agent header.
    pub contact_email: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arxiv_api_url: DEFAULT_ARXIV_API_URL.to_string(),
            hf_inference_url: DEFAULT_HF_INFERENCE_URL.to_string(),
            hf_api_token: None,
            summarizer_model: DEFAULT_SUMMARIZER_MODEL.to_string(),
            generator_model: DEFAULT_GENERATOR_MODEL.to_string(),
            contact_email: "research@example.com".to_string(),
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let hf_api_token = env::var("HF_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(Self {
            arxiv_api_url: env::var("ARXIV_API_URL").unwrap_or(defaults.arxiv_api_url),
            hf_inference_url: env::var("HF_INFERENCE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.hf_inference_url),
            hf_api_token,
            summarizer_model: env::var("SUMMARIZER_MODEL").unwrap_or(defaults.summarizer_model),
            generator_model: env::var("GENERATOR_MODEL").unwrap_or(defaults.generator_model),
            contact_email: env::var("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
        })
    }

    /// User-Agent string shared by every outbound client.
    pub fn user_agent(&self) -> String {
        format!(
            "lit-review/{} (+{})",
            env!("CARGO_PKG_VERSION"),
            self.contact_email
        )
    }

    /// Inference endpoint for a given model id.
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/{model}", self.hf_inference_url)
    }
}
