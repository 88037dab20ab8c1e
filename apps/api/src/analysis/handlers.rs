//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::pipeline::{analyze, AnalysisOptions, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    /// Candidate text, already extracted from whatever document it came in.
    pub text: String,
    #[serde(default)]
    pub top_matches: Option<usize>,
    #[serde(default)]
    pub top_gaps: Option<usize>,
}

/// POST /api/v1/analysis
///
/// Detects skills in the candidate text and returns ranked occupation matches,
/// the demand-ranked gap list and derived insights. Text without any known
/// skill yields an empty report, not an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(request) = payload.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(format!(
            "request body exceeds the limit for {} bytes of text",
            state.config.max_text_bytes
        )),
        _ => AppError::Validation(rejection.body_text()),
    })?;

    if request.text.len() > state.config.max_text_bytes {
        return Err(AppError::Validation(format!(
            "text exceeds {} bytes",
            state.config.max_text_bytes
        )));
    }

    let options = AnalysisOptions {
        top_matches: request.top_matches,
        top_gaps: request.top_gaps,
    };
    let AppState {
        taxonomy, detector, ..
    } = state;

    // CPU-bound scan; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || {
        analyze(&request.text, &taxonomy, &detector, &options)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("analysis task failed")))?;

    info!(
        "Analysis {}: {} skills, {} matches",
        report.analysis_id, report.totals.detected, report.totals.matches
    );
    Ok(Json(report))
}
