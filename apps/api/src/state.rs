use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmBackend;
use crate::ui::client::AnalysisApi;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Model backend behind `/api/analyze`. Default: `GeminiClient`.
    pub llm: Arc<dyn LlmBackend>,
    /// Client the server-rendered page uses to reach `/api/analyze`.
    pub proxy: Arc<dyn AnalysisApi>,
    pub config: Config,
}
