//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;

use crate::config::Config;
use crate::llm_client::{GenerationRequest, LlmBackend, LlmError};
use crate::routes::build_router;
use crate::state::AppState;
use crate::ui::client::{AnalysisApi, ProxyClient};

/// Canned model backend. Records every prompt it receives.
pub struct StubLlm {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(vec![]),
        }
    }

    /// Every call fails with an upstream error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmBackend for StubLlm {
    fn model(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push(request.user_prompt.clone());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 503,
                message: "The model is overloaded.".to_string(),
            }),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        gemini_api_key: "test-key".to_string(),
        gemini_base_url: "http://127.0.0.1:1".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        llm_timeout: Duration::from_secs(5),
        allowed_origins: vec!["https://letsapplai.com".to_string()],
        max_input_chars: None,
        proxy_url: "http://127.0.0.1:1/api/analyze".to_string(),
        port: 0,
        rust_log: "info".to_string(),
    }
}

/// Router wired to the given backends.
pub fn test_app(llm: Arc<dyn LlmBackend>, proxy: Arc<dyn AnalysisApi>) -> Router {
    build_router(AppState {
        llm,
        proxy,
        config: test_config(),
    })
}

/// Router whose UI proxy points nowhere; for exercising `/api/analyze`.
pub fn api_app(llm: Arc<dyn LlmBackend>) -> Router {
    let proxy = ProxyClient::new(test_config().proxy_url, Duration::from_secs(5)).unwrap();
    test_app(llm, Arc::new(proxy))
}
