use std::sync::Arc;

use tracing::info;

use mermaid_studio::agent::build_generator;
use mermaid_studio::config::AppConfig;
use mermaid_studio::prompts::PromptCatalogue;
use mermaid_studio::routes::router;
use mermaid_studio::service::generation_service::GenerationService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mermaid_studio=debug,tower_http=debug".into()),
        )
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = AppConfig::from_env()?;
    info!(
        "Using the {} backend with model {}",
        config.llm.provider, config.llm.model
    );

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let catalogue = Arc::new(PromptCatalogue::new());
    let generator = build_generator(&config.llm)?;
    let generation_service = GenerationService::new(catalogue, generator);

    // ── Router ────────────────────────────────────────────────────────────────
    let app = router(generation_service, &config.cors_origins);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
