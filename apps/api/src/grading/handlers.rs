//! Axum route handlers for the grading API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::grading::models::RubricFeedback;
use crate::grading::pipeline::{grade_speech, GradeRequest};
use crate::state::AppState;

/// POST /api/v1/speeches/grade
///
/// Grades a transcript against the four-criterion rubric. The caller is
/// responsible for transcription; this endpoint never touches audio.
pub async fn handle_grade_speech(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<RubricFeedback>, AppError> {
    let feedback = grade_speech(state.llm.as_ref(), &request).await?;
    Ok(Json(feedback))
}
