//! Axum route handlers for the Report API.

use axum::{extract::State, Form, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::pipeline::generate_report;
use crate::models::report::{EnrichmentRecord, Report};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InterestsRequest {
    pub interests: Option<String>,
}

/// POST /findjobroles
///
/// Form-encoded `interests` field. Returns the report with its wire keys.
pub async fn handle_find_job_roles(
    State(state): State<AppState>,
    Form(request): Form<InterestsRequest>,
) -> Result<Json<Report>, AppError> {
    run(&state, request).await
}

/// POST /api/v1/reports
///
/// JSON body `{"interests": "..."}`. Same pipeline as the form endpoint.
pub async fn handle_create_report(
    State(state): State<AppState>,
    Json(request): Json<InterestsRequest>,
) -> Result<Json<Report>, AppError> {
    run(&state, request).await
}

/// POST /api/v1/reports/records
///
/// Same pipeline, returned as one record per role instead of parallel arrays.
pub async fn handle_create_report_records(
    State(state): State<AppState>,
    Json(request): Json<InterestsRequest>,
) -> Result<Json<Vec<EnrichmentRecord>>, AppError> {
    let Json(report) = run(&state, request).await?;
    Ok(Json(report.records()))
}

async fn run(state: &AppState, request: InterestsRequest) -> Result<Json<Report>, AppError> {
    let report = generate_report(
        &state.llm,
        request.interests.as_deref(),
        state.config.max_concurrency,
    )
    .await?;
    Ok(Json(report))
}
