use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

use crate::errors::AppError;
use crate::models::{DiagramTypesResponse, GenerateRequest, GenerateResponse};
use crate::prompts::DiagramType;
use crate::service::generation_service::GenerationService;

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/api/generate`: natural-language description in, Mermaid code out.
pub async fn generate_handler(
    State(svc): State<GenerationService>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::InvalidBody {
        message: rejection.body_text(),
    })?;

    svc.generate(request).await.map(Json).map_err(|err| {
        if err.is_upstream() {
            error!("Diagram generation failed upstream: {err}");
        }
        err
    })
}

/// GET `/api/diagram-types`: the registry, in selector order.
pub async fn diagram_types_handler(State(svc): State<GenerationService>) -> impl IntoResponse {
    Json(DiagramTypesResponse {
        diagram_types: svc
            .catalogue()
            .diagram_types()
            .into_iter()
            .map(str::to_string)
            .collect(),
        default_type: DiagramType::DEFAULT.as_str().to_string(),
    })
}

/// GET `/health`
pub async fn health_handler() -> &'static str {
    "ok"
}
