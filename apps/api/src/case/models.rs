//! Data model for generated debate cases.

use serde::{Deserialize, Serialize};

/// The side of the motion being argued. Drives prompt wording only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    #[default]
    Proposition,
    Opposition,
}

impl Stance {
    /// Label rendered into prompts.
    pub fn label(self) -> &'static str {
        match self {
            Stance::Proposition => "Proposition",
            Stance::Opposition => "Opposition",
        }
    }
}

/// One ARES-I argument unit: Assertion, Reasoning, Evidence, Source, Impact.
/// All five fields must be non-empty for the point to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub assertion: String,
    pub reasoning: String,
    pub evidence: String,
    pub source: String,
    pub impact: String,
}

/// Suggested split of the points between the two speakers.
/// Both lists must be present and non-empty; the validator does NOT check
/// that they form a complete partition of the points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerAllocation {
    pub speaker1: Vec<String>,
    pub speaker2: Vec<String>,
}

/// A complete structured case, returned to the caller exactly as generated:
/// no field coercion, no trimming of points beyond the minimum six.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateCase {
    pub introduction: String,
    pub points: Vec<Point>,
    pub conclusion: String,
    pub speaker_allocation: SpeakerAllocation,
}
