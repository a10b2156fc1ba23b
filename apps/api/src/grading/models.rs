//! Data model for rubric feedback on a graded speech.

use serde::{Deserialize, Serialize};

/// Scored feedback for one rubric criterion. The scale differs per
/// criterion: content, style, and strategy are out of 30; overall out of 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub score: f64,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
}

/// The fixed four-criterion rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaSet {
    pub content: Criterion,
    pub style: Criterion,
    pub strategy: Criterion,
    pub overall: Criterion,
}

/// Full rubric evaluation of a transcript, returned to the caller as-is.
///
/// `total_score` is the model's own figure out of 100. It is NOT
/// cross-checked against the per-criterion sum and the two may diverge;
/// recomputing it here would silently alter the model's assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricFeedback {
    pub criteria: CriteriaSet,
    pub total_score: f64,
    pub key_takeaways: Vec<String>,
}
