//! Analysis pipeline: validate → prompt → model call → strip fences → parse →
//! normalize. Only validation failures reach the caller; every other failure
//! is logged and replaced by the failsafe result.

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::analysis::normalize::normalize;
use crate::analysis::prompts::{system_instruction, user_prompt};
use crate::analysis::schema::response_schema;
use crate::llm_client::{strip_json_fences, GenerationRequest, LlmBackend, LlmError};
use crate::models::analysis::{AnalysisRequest, AnalysisResult};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Validation(String),

    #[error("LLM is not configured: {0}")]
    Configuration(LlmError),

    #[error("LLM call failed: {0}")]
    Upstream(LlmError),

    #[error("Model output is not a JSON object: {0}")]
    MalformedOutput(String),
}

impl From<LlmError> for AnalysisError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredential => AnalysisError::Configuration(e),
            other => AnalysisError::Upstream(other),
        }
    }
}

/// Both texts must be present; `max_chars` caps each one when set.
pub fn validate_request(
    request: &AnalysisRequest,
    max_chars: Option<usize>,
) -> Result<(), AnalysisError> {
    let fields = [
        ("jobDescription", &request.job_description),
        ("resumeText", &request.resume_text),
    ];

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(AnalysisError::Validation(format!(
            "Missing {}.",
            missing.join(" and ")
        )));
    }

    if let Some(limit) = max_chars {
        let (jd_chars, resume_chars) = request.char_counts();
        for (name, len) in [("jobDescription", jd_chars), ("resumeText", resume_chars)] {
            if len > limit {
                return Err(AnalysisError::Validation(format!(
                    "{name} is too long ({len} characters, limit {limit})."
                )));
            }
        }
    }

    Ok(())
}

pub fn build_generation_request(request: &AnalysisRequest) -> GenerationRequest {
    GenerationRequest {
        system_instruction: system_instruction(),
        user_prompt: user_prompt(&request.job_description, &request.resume_text),
        response_schema: response_schema(),
    }
}

/// Turns raw completion text into a normalized result.
pub fn parse_model_output(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let cleaned = strip_json_fences(raw);

    let parsed: Value = serde_json::from_str(cleaned)
        .map_err(|e| AnalysisError::MalformedOutput(e.to_string()))?;

    if !parsed.is_object() {
        return Err(AnalysisError::MalformedOutput(format!(
            "expected an object, got {}",
            json_kind(&parsed)
        )));
    }

    Ok(normalize(&parsed, &AnalysisResult::failsafe()))
}

/// Runs one analysis end to end, surfacing every failure kind.
pub async fn run_analysis(
    request: &AnalysisRequest,
    llm: &dyn LlmBackend,
    max_chars: Option<usize>,
) -> Result<AnalysisResult, AnalysisError> {
    validate_request(request, max_chars)?;

    let generation = build_generation_request(request);
    let (jd_chars, resume_chars) = request.char_counts();
    info!(
        model = llm.model(),
        jd_chars,
        resume_chars,
        "Requesting analysis"
    );

    let raw = llm.generate(&generation).await?;
    parse_model_output(&raw)
}

/// Like `run_analysis`, but absorbs everything except validation errors into
/// the failsafe result.
pub async fn analyze_or_failsafe(
    request: &AnalysisRequest,
    llm: &dyn LlmBackend,
    max_chars: Option<usize>,
) -> Result<AnalysisResult, AnalysisError> {
    match run_analysis(request, llm, max_chars).await {
        Ok(result) => {
            info!(
                overall_score = result.overall_score,
                verdict = result.verdict.as_str(),
                "Analysis complete"
            );
            Ok(result)
        }
        Err(e @ AnalysisError::Validation(_)) => Err(e),
        Err(e @ AnalysisError::MalformedOutput(_)) => {
            warn!("Returning failsafe result: {e}");
            Ok(AnalysisResult::failsafe())
        }
        Err(e) => {
            error!("Returning failsafe result: {e}");
            Ok(AnalysisResult::failsafe())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
