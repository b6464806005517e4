//! Pretrained model handles reached through the hosted inference API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info};

use super::tokenize::PromptTokenizer;
use crate::config::Settings;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("inference request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inference API error [{status}]: {message}")]
    Api { status: u16, message: String },
    #[error("model returned no text")]
    EmptyOutput,
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

/// Inclusive token bounds for a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, ModelError>;
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_new_tokens: usize) -> Result<String, ModelError>;
}

/// Loaded model handles, built once at startup and shared read-only.
pub struct ModelHub {
    pub summarizer: Arc<dyn Summarizer>,
    pub generator: Arc<dyn TextGenerator>,
    pub tokenizer: PromptTokenizer,
}

impl ModelHub {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        generator: Arc<dyn TextGenerator>,
        tokenizer: PromptTokenizer,
    ) -> Self {
        Self {
            summarizer,
            generator,
            tokenizer,
        }
    }

    /// Connect to the configured inference endpoint and load the generator tokenizer.
    pub async fn load(settings: &Settings) -> Result<Self, ModelError> {
        let client = Arc::new(HfInferenceClient::new(settings)?);
        let tokenizer = PromptTokenizer::load(&settings.generator_model).await?;
        info!(
            summarizer = %settings.summarizer_model,
            generator = %settings.generator_model,
            tokenizer = tokenizer.kind(),
            "model handles ready"
        );
        Ok(Self::new(client.clone(), client, tokenizer))
    }
}

/// Client for the Hugging Face hosted inference interface.
pub struct HfInferenceClient {
    client: Client,
    token: Option<String>,
    summarizer_url: String,
    generator_url: String,
}

impl HfInferenceClient {
    pub fn new(settings: &Settings) -> Result<Self, ModelError> {
        let client = Client::builder()
            .user_agent(settings.user_agent())
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            token: settings.hf_api_token.clone(),
            summarizer_url: settings.model_url(&settings.summarizer_model),
            generator_url: settings.model_url(&settings.generator_model),
        })
    }

    async fn infer<T: DeserializeOwned>(&self, url: &str, body: Value) -> Result<T, ModelError> {
        let mut req = self.client.post(url).json(&body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedOutput {
    generated_text: String,
}

#[async_trait]
impl Summarizer for HfInferenceClient {
    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, ModelError> {
        let body = json!({
            "inputs": text,
            "parameters": {
                "min_length": bounds.min,
                "max_length": bounds.max,
                "do_sample": false,
            },
            "options": { "wait_for_model": true },
        });
        let outputs: Vec<SummaryOutput> = self.infer(&self.summarizer_url, body).await?;
        let summary = outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or(ModelError::EmptyOutput)?;
        debug!(chars = summary.chars().count(), "abstract summarised");
        Ok(summary)
    }
}

#[async_trait]
impl TextGenerator for HfInferenceClient {
    async fn generate(&self, prompt: &str, max_new_tokens: usize) -> Result<String, ModelError> {
        let body = json!({
            "inputs": prompt,
            "parameters": { "max_new_tokens": max_new_tokens },
            "options": { "wait_for_model": true },
        });
        let outputs: Vec<GeneratedOutput> = self.infer(&self.generator_url, body).await?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or(ModelError::EmptyOutput)
    }
}
