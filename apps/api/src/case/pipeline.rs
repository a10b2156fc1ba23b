//! Case generation — the two-stage research → synthesis pipeline.
//!
//! Stage 1 grounds the topic with a plain-prose research brief; stage 2
//! synthesizes the structured ARES-I case from that brief in JSON mode.
//! Stage 2 never starts before stage 1 completes, because its prompt embeds
//! the brief. Any failure is terminal for the invocation — there is no retry
//! transition; callers re-invoke from scratch.

use serde::Deserialize;
use tracing::{info, warn};

use crate::case::models::{DebateCase, Stance};
use crate::case::prompts::{build_case_prompt, build_research_prompt, CASE_SYSTEM, RESEARCH_SYSTEM};
use crate::case::validation::validate_debate_case;
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};

/// Sampling temperature for both stages — non-zero for stylistic variety
/// while staying fact-oriented.
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Request body for case generation.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseRequest {
    pub topic: String,
    #[serde(default)]
    pub stance: Option<Stance>,
}

/// Runs the full case pipeline: research brief, then structured synthesis.
///
/// Returns the validated case as plain data — nothing is persisted and no
/// state outlives the call.
pub async fn generate_case(
    llm: &dyn TextGenerator,
    request: &CaseRequest,
) -> Result<DebateCase, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let stance = request.stance.unwrap_or_default();
    info!(
        "Generating case for topic \"{}\" ({})",
        request.topic,
        stance.label()
    );

    let brief = fetch_research_brief(llm, &request.topic, stance).await?;
    synthesize_case(llm, &request.topic, stance, &brief).await
}

/// Stage 1: plain-prose factual grounding for the topic.
///
/// An empty upstream response is tolerated — synthesis proceeds without
/// grounding rather than failing the whole invocation.
async fn fetch_research_brief(
    llm: &dyn TextGenerator,
    topic: &str,
    stance: Stance,
) -> Result<String, AppError> {
    let prompt = build_research_prompt(topic, stance);

    let brief = llm
        .complete(RESEARCH_SYSTEM, &prompt, GENERATION_TEMPERATURE, false)
        .await
        .map_err(|e| AppError::Upstream(format!("research brief failed: {e}")))?;

    if brief.trim().is_empty() {
        warn!("Research brief came back empty; synthesizing without grounding");
    } else {
        info!("Research brief generated ({} chars)", brief.len());
    }

    Ok(brief)
}

/// Stage 2: JSON-mode synthesis of the structured case from the brief.
async fn synthesize_case(
    llm: &dyn TextGenerator,
    topic: &str,
    stance: Stance,
    brief: &str,
) -> Result<DebateCase, AppError> {
    let prompt = build_case_prompt(topic, stance, brief);

    let text = llm
        .complete(CASE_SYSTEM, &prompt, GENERATION_TEMPERATURE, true)
        .await
        .map_err(|e| AppError::Upstream(format!("case synthesis failed: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::EmptyResponse(
            "case synthesis returned no content".to_string(),
        ));
    }

    let value: serde_json::Value =
        serde_json::from_str(strip_json_fences(&text)).map_err(|e| {
            // Raw text is kept in the logs only — never in the response.
            warn!("Case synthesis returned non-JSON output: {e}; raw: {text}");
            AppError::MalformedJson(format!("case synthesis output is not valid JSON: {e}"))
        })?;

    validate_debate_case(&value).map_err(AppError::InvalidStructure)?;

    let case: DebateCase = serde_json::from_value(value)
        .map_err(|e| AppError::InvalidStructure(format!("case fields have unexpected types: {e}")))?;

    info!("Case validated: {} points", case.points.len());
    Ok(case)
}
