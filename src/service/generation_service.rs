use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::agent::TextGenerator;
use crate::errors::AppError;
use crate::extraction::extract_mermaid_code;
use crate::models::{ConversationTurn, GenerateRequest, GenerateResponse, Role};
use crate::prompts::PromptCatalogue;

pub const MAX_DESCRIPTION_LENGTH: usize = 8000;

/// Builds the exact sequence sent downstream:
/// `[system: prompt] ++ history ++ [user: description]`.
/// Client-supplied system turns are dropped so the resolved prompt stays the only one.
pub fn assemble_messages(
    system_prompt: &str,
    history: &[ConversationTurn],
    description: &str,
) -> Vec<ConversationTurn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ConversationTurn::system(system_prompt));
    messages.extend(history.iter().filter(|t| t.role != Role::System).cloned());
    messages.push(ConversationTurn::user(description));
    messages
}

/// Stateless request handler: validate, resolve the prompt, call the backend,
/// extract the fenced code. No retries and no caching.
#[derive(Clone)]
pub struct GenerationService {
    catalogue: Arc<PromptCatalogue>,
    generator: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(catalogue: Arc<PromptCatalogue>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalogue, generator }
    }

    pub fn catalogue(&self) -> &PromptCatalogue {
        &self.catalogue
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, AppError> {
        // ── Validation ────────────────────────────────────────────────────────
        if request.diagram_type.trim().is_empty() || request.description.trim().is_empty() {
            return Err(AppError::MissingFields);
        }
        let description_length = request.description.chars().count();
        if description_length > MAX_DESCRIPTION_LENGTH {
            return Err(AppError::FieldTooLong {
                field_name: "description".to_string(),
                max_length: MAX_DESCRIPTION_LENGTH,
                actual_length: description_length,
            });
        }

        let request_id = Uuid::new_v4();

        // ── Prompt resolution ─────────────────────────────────────────────────
        // Ids match exactly; a padded id is unknown like any other.
        let diagram_type = request.diagram_type.as_str();
        if !self.catalogue.is_registered(diagram_type) {
            warn!("[{request_id}] Unknown diagram type '{diagram_type}', using the default prompt");
        }
        let system_prompt = self.catalogue.resolve(diagram_type);
        let messages = assemble_messages(system_prompt, &request.history, &request.description);

        info!(
            "[{request_id}] Generating '{diagram_type}' via {} with {} prior turns",
            self.generator.name(),
            request.history.len()
        );
        debug!("[{request_id}] Description: {}", request.description);

        // ── Backend call ──────────────────────────────────────────────────────
        let full_response = self.generator.generate_text(&messages).await?;
        debug!("[{request_id}] Backend reply: {full_response}");

        // ── Extraction ────────────────────────────────────────────────────────
        let mermaid_code = match extract_mermaid_code(&full_response) {
            Some(code) => code.to_string(),
            None => {
                warn!("[{request_id}] Backend reply contained no fenced code block");
                return Err(AppError::NoCodeExtracted);
            }
        };

        info!("[{request_id}] Extracted {} bytes of Mermaid code", mermaid_code.len());
        Ok(GenerateResponse { mermaid_code, full_response })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Replies with canned text and records every message sequence it receives.
    struct ScriptedGenerator {
        reply: Result<String, fn() -> AppError>,
        calls: AtomicUsize,
        seen: Mutex<Vec<Vec<ConversationTurn>>>,
    }

    impl ScriptedGenerator {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: fn() -> AppError) -> Arc<Self> {
            Arc::new(Self { reply: Err(err), calls: AtomicUsize::new(0), seen: Mutex::new(Vec::new()) })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn generate_text(&self, messages: &[ConversationTurn]) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(messages.to_vec());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn service(generator: Arc<ScriptedGenerator>) -> GenerationService {
        GenerationService::new(Arc::new(PromptCatalogue::new()), generator)
    }

    fn request(diagram_type: &str, description: &str) -> GenerateRequest {
        GenerateRequest {
            diagram_type: diagram_type.to_string(),
            description: description.to_string(),
            history: Vec::new(),
        }
    }

    #[tokio::test]
    async fn pie_chart_end_to_end() {
        let code = "pie\n  title Fruit Sales\n  \"Apples\" : 50\n  \"Pears\" : 30\n  \"Bananas\" : 20";
        let reply = format!("```mermaid\n{code}```");
        let generator = ScriptedGenerator::replying(&reply);
        let svc = service(generator.clone());

        let response = svc
            .generate(request(
                "Pie Chart",
                "distribution of fruit sales: apples 50, pears 30, bananas 20",
            ))
            .await
            .unwrap();

        assert_eq!(response.mermaid_code, code);
        assert_eq!(response.full_response, reply);
        assert_eq!(generator.calls(), 1);
        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen[0][0].content, PromptCatalogue::new().resolve("Pie Chart"));
    }

    #[tokio::test]
    async fn blank_description_never_reaches_the_backend() {
        let generator = ScriptedGenerator::replying("```mermaid\npie\n```");
        let svc = service(generator.clone());

        let err = svc.generate(request("Flowchart", "   \n\t")).await.unwrap_err();
        assert!(matches!(err, AppError::MissingFields));

        let err = svc.generate(request("", "a flow")).await.unwrap_err();
        assert!(matches!(err, AppError::MissingFields));

        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn oversized_description_is_rejected_before_the_backend() {
        let generator = ScriptedGenerator::replying("```mermaid\npie\n```");
        let svc = service(generator.clone());

        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        let err = svc.generate(request("Flowchart", &long)).await.unwrap_err();
        assert!(matches!(err, AppError::FieldTooLong { .. }));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn history_is_replayed_between_prompt_and_new_input() {
        let generator = ScriptedGenerator::replying("```mermaid\nflowchart TD\n A-->B\n```");
        let svc = service(generator.clone());

        let mut req = request("Flowchart", "C");
        req.history = vec![ConversationTurn::user("A"), ConversationTurn::assistant("B")];
        svc.generate(req).await.unwrap();

        let seen = generator.seen.lock().unwrap();
        let prompt = PromptCatalogue::new().resolve("Flowchart").to_string();
        assert_eq!(
            seen[0],
            vec![
                ConversationTurn::system(prompt),
                ConversationTurn::user("A"),
                ConversationTurn::assistant("B"),
                ConversationTurn::user("C"),
            ]
        );
    }

    #[tokio::test]
    async fn identical_requests_call_the_backend_each_time() {
        let generator = ScriptedGenerator::replying("```mermaid\npie\n```");
        let svc = service(generator.clone());

        svc.generate(request("Pie Chart", "fruit")).await.unwrap();
        svc.generate(request("Pie Chart", "fruit")).await.unwrap();

        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn unknown_type_uses_the_default_prompt() {
        let generator = ScriptedGenerator::replying("```mermaid\nflowchart TD\n A-->B\n```");
        let svc = service(generator.clone());

        svc.generate(request("Napkin Sketch", "anything")).await.unwrap();

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen[0][0].content, PromptCatalogue::new().default_template());
    }

    #[tokio::test]
    async fn padded_type_id_is_not_a_registered_type() {
        let generator = ScriptedGenerator::replying("```mermaid\npie\n```");
        let svc = service(generator.clone());

        svc.generate(request(" Pie Chart ", "fruit")).await.unwrap();

        let catalogue = PromptCatalogue::new();
        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen[0][0].content, catalogue.default_template());
        assert_ne!(seen[0][0].content, catalogue.resolve("Pie Chart"));
    }

    #[tokio::test]
    async fn unfenced_reply_is_an_extraction_failure() {
        let generator = ScriptedGenerator::replying("Sure! flowchart TD A-->B");
        let svc = service(generator);

        let err = svc.generate(request("Flowchart", "a flow")).await.unwrap_err();
        assert!(matches!(err, AppError::NoCodeExtracted));
    }

    #[tokio::test]
    async fn backend_errors_pass_through_untouched() {
        let svc = service(ScriptedGenerator::failing(|| AppError::UpstreamEmpty {
            backend: "scripted".into(),
        }));
        let err = svc.generate(request("Flowchart", "a flow")).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamEmpty { .. }));

        let svc = service(ScriptedGenerator::failing(|| AppError::upstream("rate limited")));
        let err = svc.generate(request("Flowchart", "a flow")).await.unwrap_err();
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn assembly_drops_client_system_turns() {
        let messages = assemble_messages(
            "PROMPT",
            &[ConversationTurn::system("injected"), ConversationTurn::user("A")],
            "B",
        );
        assert_eq!(
            messages,
            vec![
                ConversationTurn::system("PROMPT"),
                ConversationTurn::user("A"),
                ConversationTurn::user("B"),
            ]
        );
    }
}
