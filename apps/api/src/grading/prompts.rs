// All LLM prompt constants and builders for speech grading.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Rendered into the prompt when the caller supplies no topic.
const UNKNOWN_TOPIC: &str = "Unknown topic";

/// System prompt for speech grading.
pub const GRADING_SYSTEM: &str =
    "You are an expert debate coach who provides detailed feedback on student speeches.";

/// Grading prompt template. Embeds the rubric scales and the exact response
/// schema. Placeholders: {topic}, {transcript}, {json_only}.
const GRADING_PROMPT_TEMPLATE: &str = r#"You are evaluating a student's speech for a Middle School Public Debate Program (MSPDP) format debate.

The debate topic is: "{topic}"

Here is the student's speech transcript:
"""
{transcript}
"""

Evaluate this speech based on the following criteria:
1. Content (30 points): Quality of arguments, evidence, and reasoning
2. Style (30 points): Delivery, language use, and persuasiveness
3. Strategy (30 points): Organization, time management, and responsiveness to the topic
4. Overall (10 points): General effectiveness and impact

For each criterion, provide:
- A score (out of the available points)
- Specific feedback with examples from the speech
- Suggestions for improvement

Then provide an overall assessment with the total score (out of 100) and 2-3 key takeaways.

Return a JSON object with this EXACT structure:
{
  "criteria": {
    "content": {
      "score": number,
      "feedback": "string",
      "suggestions": "string"
    },
    "style": {
      "score": number,
      "feedback": "string",
      "suggestions": "string"
    },
    "strategy": {
      "score": number,
      "feedback": "string",
      "suggestions": "string"
    },
    "overall": {
      "score": number,
      "feedback": "string"
    }
  },
  "totalScore": number,
  "keyTakeaways": ["string", "string", "string"]
}

{json_only}"#;

/// Builds the grading user prompt. Deterministic, no I/O. A missing topic
/// renders as "Unknown topic" rather than failing.
pub fn build_grading_prompt(topic: Option<&str>, transcript: &str) -> String {
    GRADING_PROMPT_TEMPLATE
        .replace("{topic}", topic.unwrap_or(UNKNOWN_TOPIC))
        .replace("{transcript}", transcript)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}
