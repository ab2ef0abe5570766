use gloo_net::http::{Request, Response};

use crate::models::{DiagramTypes, ErrorBody, GenerateRequest, GenerateResponse};

/// Base URL of the backend API server.
const API_BASE: &str = "http://localhost:3000";

/// Prefers the `{error}` body the server sends with every non-2xx response.
async fn error_message(resp: Response, fallback: &str) -> String {
    match resp.json::<ErrorBody>().await {
        Ok(body) if !body.error.trim().is_empty() => body.error,
        _ => format!("{fallback} (status {})", resp.status()),
    }
}

/// Fetches the diagram-type registry used by the selector.
pub async fn fetch_diagram_types() -> Result<DiagramTypes, String> {
    let resp = Request::get(&format!("{API_BASE}/api/diagram-types"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(error_message(resp, "Failed to load diagram types").await);
    }

    resp.json::<DiagramTypes>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}

/// Sends a generation or refinement request.
pub async fn generate(request: &GenerateRequest) -> Result<GenerateResponse, String> {
    let resp = Request::post(&format!("{API_BASE}/api/generate"))
        .json(request)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(error_message(resp, "Failed to generate diagram").await);
    }

    resp.json::<GenerateResponse>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
