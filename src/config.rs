use std::fmt;

use crate::errors::AppError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_TOKENS: u64 = 1500;

/// Which LLM backend serves generation requests. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Native multi-turn chat completions.
    OpenAi,
    /// Single combined prompt.
    Gemini,
}

impl LlmProvider {
    /// `openai` (any case) selects OpenAI; anything else, including unset, selects Gemini.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(|f| f.trim().to_lowercase()) {
            Some(f) if f == "openai" => LlmProvider::OpenAi,
            _ => LlmProvider::Gemini,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::Gemini => "gemini",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials and tuning for the active backend.
#[derive(Clone)]
pub struct ProviderSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u64,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Allowed CORS origins; empty means any origin.
    pub cors_origins: Vec<String>,
    pub llm: ProviderSettings,
}

impl AppConfig {
    /// Reads the process environment. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = LlmProvider::from_flag(lookup("LLM_PROVIDER").as_deref());
        let (key_var, model_var, default_model) = match provider {
            LlmProvider::OpenAi => ("OPENAI_API_KEY", "OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            LlmProvider::Gemini => ("GEMINI_API_KEY", "GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        };

        let api_key = non_empty(key_var).ok_or_else(|| {
            AppError::configuration(format!("{key_var} must be set when LLM_PROVIDER is {provider}"))
        })?;

        let llm = ProviderSettings {
            provider,
            api_key,
            model: non_empty(model_var).unwrap_or_else(|| default_model.to_string()),
            temperature: non_empty("LLM_TEMPERATURE")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: non_empty("LLM_MAX_TOKENS")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
        };

        let port = non_empty("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = non_empty("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { port, cors_origins, llm })
    }
}
