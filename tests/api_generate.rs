use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mermaid_studio::agent::TextGenerator;
use mermaid_studio::errors::AppError;
use mermaid_studio::models::{ConversationTurn, Role};
use mermaid_studio::prompts::PromptCatalogue;
use mermaid_studio::routes::router;
use mermaid_studio::service::generation_service::GenerationService;

enum Reply {
    Text(&'static str),
    Empty,
    Fail(&'static str),
}

struct FakeGenerator {
    reply: Reply,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<ConversationTurn>>,
}

impl FakeGenerator {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self { reply, calls: AtomicUsize::new(0), last_messages: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn generate_text(&self, messages: &[ConversationTurn]) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages.to_vec();
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Empty => Err(AppError::UpstreamEmpty { backend: "fake".to_string() }),
            Reply::Fail(message) => Err(AppError::upstream(message)),
        }
    }
}

fn app(generator: Arc<FakeGenerator>) -> Router {
    let service = GenerationService::new(Arc::new(PromptCatalogue::new()), generator);
    router(service, &[])
}

async fn post_generate(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn generate_returns_code_and_full_response() {
    let reply = "Here it is:\n```mermaid\npie\n  title Fruit Sales\n  \"Apples\" : 50\n```\nDone.";
    let generator = FakeGenerator::new(Reply::Text(reply));

    let (status, body) = post_generate(
        app(generator.clone()),
        json!({"diagramType": "Pie Chart", "description": "fruit sales"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mermaidCode"], "pie\n  title Fruit Sales\n  \"Apples\" : 50\n");
    assert_eq!(body["fullResponse"], reply);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn missing_fields_are_a_bad_request() {
    let generator = FakeGenerator::new(Reply::Text("```mermaid\npie\n```"));

    let (status, body) =
        post_generate(app(generator.clone()), json!({"diagramType": "Flowchart"}).to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, _) = post_generate(
        app(generator.clone()),
        json!({"diagramType": "Flowchart", "description": "  "}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request_with_json_body() {
    let generator = FakeGenerator::new(Reply::Text("```mermaid\npie\n```"));
    let (status, body) = post_generate(app(generator.clone()), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn reply_without_fence_is_unprocessable() {
    let generator = FakeGenerator::new(Reply::Text("I cannot draw that, sorry."));
    let (status, body) = post_generate(
        app(generator),
        json!({"diagramType": "Flowchart", "description": "a flow"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Failed to generate valid Mermaid code");
}

#[tokio::test]
async fn upstream_failures_are_server_errors() {
    let (status, body) = post_generate(
        app(FakeGenerator::new(Reply::Fail("quota exceeded"))),
        json!({"diagramType": "Flowchart", "description": "a flow"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "quota exceeded");

    let (status, body) = post_generate(
        app(FakeGenerator::new(Reply::Fail(""))),
        json!({"diagramType": "Flowchart", "description": "a flow"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate diagram");

    let (status, _) = post_generate(
        app(FakeGenerator::new(Reply::Empty)),
        json!({"diagramType": "Flowchart", "description": "a flow"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn refinement_history_reaches_the_backend_in_order() {
    let generator = FakeGenerator::new(Reply::Text("```mermaid\nflowchart TD\n  A --> B\n```"));
    let (status, _) = post_generate(
        app(generator.clone()),
        json!({
            "diagramType": "Flowchart",
            "description": "add a node C",
            "history": [
                {"role": "user", "content": "two nodes"},
                {"role": "assistant", "content": "```mermaid\nflowchart TD\n  A --> B\n```"}
            ]
        })
        .to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let messages = generator.last_messages.lock().unwrap().clone();
    let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
    assert_eq!(messages[0].content, PromptCatalogue::new().resolve("Flowchart"));
    assert_eq!(messages[1].content, "two nodes");
    assert_eq!(messages[3].content, "add a node C");
}

#[tokio::test]
async fn unknown_history_role_is_rejected() {
    let generator = FakeGenerator::new(Reply::Text("```mermaid\npie\n```"));
    let (status, _) = post_generate(
        app(generator.clone()),
        json!({
            "diagramType": "Flowchart",
            "description": "x",
            "history": [{"role": "tool", "content": "?"}]
        })
        .to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn diagram_types_lists_the_registry() {
    let request = Request::builder().uri("/api/diagram-types").body(Body::empty()).unwrap();
    let response = app(FakeGenerator::new(Reply::Empty)).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let types = body["diagramTypes"].as_array().unwrap();
    assert_eq!(types.len(), 20);
    assert_eq!(types[0], "Flowchart");
    assert!(types.contains(&json!("C4 Diagram")));
    assert!(types.contains(&json!("Block Diagram")));
    assert_eq!(body["defaultType"], "Flowchart");
}

#[tokio::test]
async fn health_is_ok() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app(FakeGenerator::new(Reply::Empty)).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
