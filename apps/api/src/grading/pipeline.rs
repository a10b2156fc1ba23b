//! Speech grading — a single JSON-mode round trip.
//!
//! The transcript arrives from the caller (transcription is an upstream
//! collaborator, not part of this service). A failed invocation is terminal;
//! callers re-invoke from scratch.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::grading::models::RubricFeedback;
use crate::grading::prompts::{build_grading_prompt, GRADING_SYSTEM};
use crate::grading::validation::validate_rubric_feedback;
use crate::llm_client::{strip_json_fences, TextGenerator};

/// Service-default sampling for grading. Rubric scoring tolerates variety;
/// the validator pins down the shape.
const GRADING_TEMPERATURE: f32 = 1.0;

/// Request body for speech grading.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeRequest {
    #[serde(default)]
    pub topic: Option<String>,
    pub transcript: String,
}

/// Grades a transcript against the four-criterion rubric.
pub async fn grade_speech(
    llm: &dyn TextGenerator,
    request: &GradeRequest,
) -> Result<RubricFeedback, AppError> {
    if request.transcript.trim().is_empty() {
        return Err(AppError::Validation(
            "transcript cannot be empty".to_string(),
        ));
    }

    let prompt = build_grading_prompt(request.topic.as_deref(), &request.transcript);

    let text = llm
        .complete(GRADING_SYSTEM, &prompt, GRADING_TEMPERATURE, true)
        .await
        .map_err(|e| AppError::Upstream(format!("speech grading failed: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::EmptyResponse(
            "speech grading returned no content".to_string(),
        ));
    }

    let value: serde_json::Value =
        serde_json::from_str(strip_json_fences(&text)).map_err(|e| {
            // Raw text is kept in the logs only — never in the response.
            warn!("Speech grading returned non-JSON output: {e}; raw: {text}");
            AppError::MalformedJson(format!("grading output is not valid JSON: {e}"))
        })?;

    validate_rubric_feedback(&value).map_err(AppError::InvalidStructure)?;

    let feedback: RubricFeedback = serde_json::from_value(value).map_err(|e| {
        AppError::InvalidStructure(format!("feedback fields have unexpected types: {e}"))
    })?;

    info!("Speech graded: total score {}", feedback.total_score);
    Ok(feedback)
}
