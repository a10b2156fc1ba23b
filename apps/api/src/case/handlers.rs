//! Axum route handlers for the case API.

use axum::{extract::State, Json};

use crate::case::models::DebateCase;
use crate::case::pipeline::{generate_case, CaseRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/cases/generate
///
/// Runs the two-stage pipeline and returns the validated case. Nothing is
/// persisted here — the caller owns storage of the returned structure.
pub async fn handle_generate_case(
    State(state): State<AppState>,
    Json(request): Json<CaseRequest>,
) -> Result<Json<DebateCase>, AppError> {
    let case = generate_case(state.llm.as_ref(), &request).await?;
    Ok(Json(case))
}
