//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::analysis::service::analyze_or_failsafe;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRequest, AnalysisResult};
use crate::state::AppState;

/// POST /api/analyze
///
/// Validation failures → 400 `{message}`. Any model, network or parsing
/// failure → 200 with the failsafe result, so the UI always has something
/// to render.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!(
            "Missing or invalid jobDescription or resumeText: {}",
            rejection.body_text()
        ))
    })?;

    let analysis_id = Uuid::new_v4();
    let result = analyze_or_failsafe(
        &request,
        state.llm.as_ref(),
        state.config.max_input_chars,
    )
    .instrument(info_span!("analysis", %analysis_id))
    .await?;

    Ok(Json(result))
}

/// Any verb on `/api/analyze` other than POST and the CORS pre-flight.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
