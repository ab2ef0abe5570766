use async_trait::async_trait;
use rig::completion::Prompt;
use rig::prelude::CompletionClient;
use rig::providers::gemini;
use tracing::{debug, error};

use super::{TextGenerator, combine_into_single_prompt, require_content};
use crate::config::ProviderSettings;
use crate::errors::AppError;
use crate::models::ConversationTurn;

const BACKEND_NAME: &str = "gemini";

/// Single-prompt backend: every turn, system included, is flattened into one
/// labelled prompt string.
#[derive(Clone)]
pub struct GeminiPromptGenerator {
    client: gemini::Client,
    model: String,
    temperature: f64,
    max_tokens: u64,
}

impl GeminiPromptGenerator {
    pub fn new(settings: &ProviderSettings) -> Result<Self, AppError> {
        let client = gemini::Client::builder()
            .api_key(settings.api_key.as_str())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build Gemini client: {e}")))?;
        Ok(Self {
            client,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiPromptGenerator {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn generate_text(&self, messages: &[ConversationTurn]) -> Result<String, AppError> {
        let prompt = combine_into_single_prompt(messages);
        debug!("Gemini prompt is {} characters", prompt.len());

        let agent = self
            .client
            .agent(&self.model)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build();

        let content = agent.prompt(prompt.as_str()).await.map_err(|e| {
            error!("Gemini generation failed for model {}: {e}", self.model);
            AppError::upstream(e.to_string())
        })?;

        require_content(BACKEND_NAME, content)
    }
}
