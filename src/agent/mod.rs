//! LLM backends behind a single text-generation capability.
//!
//! The service hands every backend the same role-tagged message sequence;
//! each backend adapts it to its provider's native request shape.

mod gemini;
mod openai;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{LlmProvider, ProviderSettings};
use crate::errors::AppError;
use crate::models::{ConversationTurn, Role};

pub use gemini::GeminiPromptGenerator;
pub use openai::OpenAiChatGenerator;

/// Label used for the system role when turns are flattened into one prompt.
const SYSTEM_LABEL: &str = "Instructions";

/// Turns an ordered message sequence into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short backend name, used in logs and error messages.
    fn name(&self) -> &'static str;

    async fn generate_text(&self, messages: &[ConversationTurn]) -> Result<String, AppError>;
}

/// Builds the backend selected in `settings`.
pub fn build_generator(settings: &ProviderSettings) -> Result<Arc<dyn TextGenerator>, AppError> {
    let generator: Arc<dyn TextGenerator> = match settings.provider {
        LlmProvider::OpenAi => Arc::new(OpenAiChatGenerator::new(settings)?),
        LlmProvider::Gemini => Arc::new(GeminiPromptGenerator::new(settings)?),
    };
    Ok(generator)
}

/// Flattens turns into a single prompt string: `"<label>: <content>"` per turn,
/// separated by a blank line.
pub fn combine_into_single_prompt(messages: &[ConversationTurn]) -> String {
    messages
        .iter()
        .map(|m| {
            let label = match m.role {
                Role::System => SYSTEM_LABEL,
                other => other.as_str(),
            };
            format!("{label}: {}", m.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A message sequence split into the pieces a chat-style API takes separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatParts {
    pub preamble: String,
    pub history: Vec<ConversationTurn>,
    pub prompt: String,
}

/// System turns become the preamble, the final user turn becomes the prompt and
/// everything in between is replayed history. `None` when the sequence does not
/// end with a user turn.
pub fn split_for_chat(messages: &[ConversationTurn]) -> Option<ChatParts> {
    let preamble = messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut dialogue: Vec<ConversationTurn> =
        messages.iter().filter(|m| m.role != Role::System).cloned().collect();

    match dialogue.pop() {
        Some(last) if last.role == Role::User => Some(ChatParts {
            preamble,
            history: dialogue,
            prompt: last.content,
        }),
        _ => None,
    }
}

/// Rejects a reply with no text content.
pub(crate) fn require_content(backend: &str, content: String) -> Result<String, AppError> {
    if content.trim().is_empty() {
        Err(AppError::UpstreamEmpty { backend: backend.to_string() })
    } else {
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> Vec<ConversationTurn> {
        vec![
            ConversationTurn::system("RULES"),
            ConversationTurn::user("A"),
            ConversationTurn::assistant("B"),
            ConversationTurn::user("C"),
        ]
    }

    #[test]
    fn single_prompt_labels_and_joins_turns() {
        assert_eq!(
            combine_into_single_prompt(&sequence()),
            "Instructions: RULES\n\nuser: A\n\nassistant: B\n\nuser: C"
        );
    }

    #[test]
    fn single_prompt_of_nothing_is_empty() {
        assert_eq!(combine_into_single_prompt(&[]), "");
    }

    #[test]
    fn chat_split_separates_preamble_history_and_prompt() {
        let parts = split_for_chat(&sequence()).unwrap();
        assert_eq!(parts.preamble, "RULES");
        assert_eq!(parts.history, vec![ConversationTurn::user("A"), ConversationTurn::assistant("B")]);
        assert_eq!(parts.prompt, "C");
    }

    #[test]
    fn chat_split_requires_trailing_user_turn() {
        let mut messages = sequence();
        messages.pop();
        assert_eq!(split_for_chat(&messages), None);
        assert_eq!(split_for_chat(&[ConversationTurn::system("only rules")]), None);
    }

    fn settings(provider: LlmProvider) -> ProviderSettings {
        ProviderSettings {
            provider,
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            temperature: 0.7,
            max_tokens: 1500,
        }
    }

    #[test]
    fn provider_flag_selects_the_matching_backend() {
        let openai = build_generator(&settings(LlmProvider::OpenAi)).unwrap();
        assert_eq!(openai.name(), "openai");

        let gemini = build_generator(&settings(LlmProvider::Gemini)).unwrap();
        assert_eq!(gemini.name(), "gemini");

        let fallback = build_generator(&settings(LlmProvider::from_flag(Some("anthropic")))).unwrap();
        assert_eq!(fallback.name(), "gemini");
    }

    #[test]
    fn blank_reply_is_upstream_empty() {
        let err = require_content("gemini", " \n ".to_string()).unwrap_err();
        assert!(matches!(err, AppError::UpstreamEmpty { .. }));
        assert_eq!(require_content("gemini", "ok".to_string()).unwrap(), "ok");
    }
}
