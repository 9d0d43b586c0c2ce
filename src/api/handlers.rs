//! HTTP request handlers for the local analysis endpoint.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{analyze_against_history, analyze_with_delimiter, chart_data, compare};
use crate::error::EngineResult;

use super::request::AnalysisRequest;
use super::response::{AnalysisResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

/// Handler for POST /analyze endpoint.
///
/// Accepts the rows of one period and returns its analysis, optionally
/// compared against a previous period.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_analysis(request, &state, correlation_id) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                roles = result.period.summaries.len(),
                grand_total = %result.period.grand_total,
                compared = result.comparison.is_some(),
                duration_us = start_time.elapsed().as_micros(),
                "Analysis completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Analysis failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the analysis for one request.
///
/// The current rows are only archived once they have analyzed cleanly, so
/// a rejected file never becomes somebody's previous period.
fn perform_analysis(
    request: AnalysisRequest,
    state: &AppState,
    analysis_id: Uuid,
) -> EngineResult<AnalysisResponse> {
    let config = state.config();
    let delimiter = config.role_delimiter();

    let (period, comparison) = match (&request.previous_rows, request.recorded_at) {
        (Some(previous_rows), _) => {
            let period = analyze_with_delimiter(&request.rows, delimiter)?;
            let previous = analyze_with_delimiter(previous_rows, delimiter)?;
            let comparison = compare(&period, &previous);
            (period, Some(comparison))
        }
        (None, Some(recorded_at)) if request.compare_with_history => {
            let history = state.history();
            let analysis =
                analyze_against_history(&request.rows, recorded_at, &*history, delimiter)?;
            (analysis.period, analysis.comparison)
        }
        (None, _) => (analyze_with_delimiter(&request.rows, delimiter)?, None),
    };

    if let Some(recorded_at) = request.recorded_at {
        state.history().archive(recorded_at, request.rows);
    }

    let chart = chart_data(&period, config.departments());
    Ok(AnalysisResponse {
        analysis_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        comparison,
        chart,
    })
}
