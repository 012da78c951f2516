use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_ALLOWED_ORIGIN: &str = "https://letsapplai.com";
/// Extra time the page's client waits beyond the model call, so the proxy's
/// failsafe answer to a timed-out model call still arrives.
const PROXY_TIMEOUT_GRACE: Duration = Duration::from_secs(10);

/// Application configuration loaded from environment variables.
/// Startup fails if the LLM credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub llm_timeout: Duration,
    pub allowed_origins: Vec<String>,
    /// Per-field character cap on analysis inputs. `None` forwards any length.
    pub max_input_chars: Option<usize>,
    /// Endpoint the presentation layer posts analyses to.
    pub proxy_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        if gemini_api_key.trim().is_empty() {
            bail!("Required environment variable 'GEMINI_API_KEY' is empty");
        }

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let llm_timeout = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        let max_input_chars = match std::env::var("MAX_INPUT_CHARS") {
            Ok(raw) => Some(parse_max_input_chars(&raw)?),
            Err(_) => None,
        };

        let allowed_origins = parse_origins(
            &std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
        );

        Ok(Config {
            gemini_api_key,
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            llm_timeout,
            allowed_origins,
            max_input_chars,
            proxy_url: std::env::var("PROXY_URL")
                .unwrap_or_else(|_| format!("http://127.0.0.1:{port}/api/analyze")),
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Timeout for the page's client. Always outlasts `llm_timeout`.
    pub fn proxy_timeout(&self) -> Duration {
        self.llm_timeout + PROXY_TIMEOUT_GRACE
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_max_input_chars(raw: &str) -> Result<usize> {
    let limit = raw
        .trim()
        .parse::<usize>()
        .context("MAX_INPUT_CHARS must be a positive integer")?;
    if limit == 0 {
        bail!("MAX_INPUT_CHARS must be a positive integer, got 0 (unset it for no cap)");
    }
    Ok(limit)
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
