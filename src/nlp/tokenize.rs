//! Prompt truncation to the generator's input window.

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::ModelError;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid regex"));

/// Counts prompt tokens and cuts prompts that exceed the input cap.
///
/// Over-long prompts lose their tail without any warning to the caller.
pub enum PromptTokenizer {
    /// Whitespace-separated words stand in for model tokens.
    Whitespace,
    #[cfg(feature = "tokenizer")]
    Pretrained(Box<tokenizers::Tokenizer>),
}

impl PromptTokenizer {
    /// Word-count tokenizer used when the `tokenizer` feature is off.
    #[cfg(not(feature = "tokenizer"))]
    pub async fn load(_model: &str) -> Result<Self, ModelError> {
        Ok(Self::Whitespace)
    }

    /// Fetch the generator's own tokenizer from the model hub.
    #[cfg(feature = "tokenizer")]
    pub async fn load(model: &str) -> Result<Self, ModelError> {
        let model = model.to_string();
        let tokenizer = tokio::task::spawn_blocking(move || {
            tokenizers::Tokenizer::from_pretrained(&model, None)
        })
        .await
        .map_err(|e| ModelError::Tokenizer(e.to_string()))?
        .map_err(|e| ModelError::Tokenizer(e.to_string()))?;
        Ok(Self::Pretrained(Box::new(tokenizer)))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            #[cfg(feature = "tokenizer")]
            Self::Pretrained(_) => "pretrained",
        }
    }

    /// Return `prompt` unchanged if it fits in `max_tokens`, otherwise its first `max_tokens` tokens.
    pub fn truncate(&self, prompt: &str, max_tokens: usize) -> Result<String, ModelError> {
        match self {
            Self::Whitespace => Ok(truncate_words(prompt, max_tokens).to_string()),
            #[cfg(feature = "tokenizer")]
            Self::Pretrained(tokenizer) => {
                // Special tokens such as the trailing `</s>` count against the window.
                let encoding = tokenizer
                    .encode(prompt, true)
                    .map_err(|e| ModelError::Tokenizer(e.to_string()))?;
                let ids = encoding.get_ids();
                if ids.len() <= max_tokens {
                    return Ok(prompt.to_string());
                }
                let mask = encoding.get_special_tokens_mask();
                let specials = mask.iter().filter(|&&m| m == 1).count();
                let budget = max_tokens.saturating_sub(specials);
                let kept: Vec<u32> = ids
                    .iter()
                    .zip(mask)
                    .filter(|(_, &m)| m == 0)
                    .map(|(&id, _)| id)
                    .take(budget)
                    .collect();
                tokenizer
                    .decode(&kept, true)
                    .map_err(|e| ModelError::Tokenizer(e.to_string()))
            }
        }
    }
}

fn truncate_words(prompt: &str, max_tokens: usize) -> &str {
    if max_tokens == 0 {
        return "";
    }
    let mut words = WORD.find_iter(prompt);
    match words.nth(max_tokens - 1) {
        // Cut right after the last word that still fits.
        Some(last) if words.next().is_some() => &prompt[..last.end()],
        _ => prompt,
    }
}
