use async_trait::async_trait;
use rig::completion::Chat;
use rig::message::Message as RigMessage;
use rig::prelude::CompletionClient;
use rig::providers::openai;
use tracing::error;

use super::{TextGenerator, require_content, split_for_chat};
use crate::config::ProviderSettings;
use crate::errors::AppError;
use crate::models::{ConversationTurn, Role};

const BACKEND_NAME: &str = "openai";

/// Replays turns as rig chat history. System turns travel in the preamble instead.
fn to_rig_history(turns: &[ConversationTurn]) -> Vec<RigMessage> {
    turns
        .iter()
        .filter_map(|m| match m.role {
            Role::User => Some(RigMessage::user(&m.content)),
            Role::Assistant => Some(RigMessage::assistant(&m.content)),
            Role::System => None,
        })
        .collect()
}

/// Chat-completions backend: keeps the conversation multi-turn.
/// A fresh agent is built per call so the preamble always matches the request.
#[derive(Clone)]
pub struct OpenAiChatGenerator {
    client: openai::CompletionsClient,
    model: String,
    temperature: f64,
    max_tokens: u64,
}

impl OpenAiChatGenerator {
    pub fn new(settings: &ProviderSettings) -> Result<Self, AppError> {
        let client = openai::Client::builder()
            .api_key(settings.api_key.as_str())
            .build()
            .map(|client| client.completions_api())
            .map_err(|e| AppError::configuration(format!("Failed to build OpenAI client: {e}")))?;
        Ok(Self {
            client,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatGenerator {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn generate_text(&self, messages: &[ConversationTurn]) -> Result<String, AppError> {
        let parts = split_for_chat(messages)
            .ok_or_else(|| AppError::upstream("Conversation must end with a user message"))?;

        let agent = self
            .client
            .agent(&self.model)
            .preamble(&parts.preamble)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build();

        let content = agent
            .chat(parts.prompt.as_str(), to_rig_history(&parts.history))
            .await
            .map_err(|e| {
                error!("OpenAI chat completion failed for model {}: {e}", self.model);
                AppError::upstream(e.to_string())
            })?;

        require_content(BACKEND_NAME, content)
    }
}
