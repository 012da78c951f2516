/// LLM Client: the single point of entry for all model calls in Applai.
///
/// ARCHITECTURAL RULE: No other module may call the model provider directly.
/// Everything goes through a `LlmBackend`, injected into `AppState` so tests
/// can swap in a stub.
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM credential is missing")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response blocked by the model: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One structured-output completion: instruction, prompt and the JSON schema
/// the model must answer with.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_prompt: String,
    pub response_schema: Value,
}

/// A model backend that turns a `GenerationRequest` into raw completion text.
///
/// Carried in `AppState` as `Arc<dyn LlmBackend>`.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Model identifier, for logging.
    fn model(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
///
/// Repeats until no fence marker is left at either end, so applying it to
/// its own output is a no-op.
pub fn strip_json_fences(text: &str) -> &str {
    let mut text = text.trim();
    loop {
        let mut next = text;

        if let Some(rest) = next.strip_prefix("```") {
            next = match rest.get(..4) {
                Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
                _ => rest,
            };
            next = next.trim_start();
        }
        if let Some(rest) = next.strip_suffix("```") {
            next = rest.trim_end();
        }

        if next.len() == text.len() {
            return text;
        }
        text = next;
    }
}
