// All LLM prompt constants and builders for case generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::case::models::Stance;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NO_FABRICATION_INSTRUCTION};

/// System prompt for the research-brief call — plain prose expected.
pub const RESEARCH_SYSTEM: &str = "You are a professional researcher who provides \
    accurate, factual information with real sources. Never fabricate information. \
    Be thorough and detailed in your research.";

/// Research prompt template. Placeholders: {topic}, {stance}, {no_fabrication}.
const RESEARCH_PROMPT_TEMPLATE: &str = r#"You are preparing a factual brief on the following debate topic:

Topic: "{topic}"
Side to argue: "{stance}"

Provide a comprehensive research brief that includes:
1. Key facts and statistics related to this topic (be specific with numbers and data)
2. Major arguments for the {stance} side with supporting evidence
3. Credible sources and studies that can be cited (only real, verifiable sources with specific names, years, and publications)
4. Important context and background information
5. Expert opinions and quotes from recognized authorities in the field

This research will be used to build a structured debate case, so focus on accuracy, depth, and factual information.
{no_fabrication}

Provide at least 10 specific pieces of evidence that can be used in the case."#;

/// System prompt for case synthesis — enforces the coach persona.
pub const CASE_SYSTEM: &str = "You are an expert debate coach who creates structured \
    debate cases using the ARES-I format. You prioritize factual accuracy, thorough \
    reasoning, and comprehensive evidence. Never fabricate information. \
    Make each point detailed and well-developed.";

/// Case synthesis prompt template. Embeds the exact response schema so the
/// service can be asked for conforming JSON.
/// Placeholders: {topic}, {stance}, {research_brief}, {no_fabrication}, {json_only}.
const CASE_PROMPT_TEMPLATE: &str = r#"You are creating a structured case for a Middle School Public Debate Program (MSPDP) format debate.

The debate topic is: "{topic}"
The side to argue is: "{stance}"

Use the following research brief to ensure factual accuracy:

{research_brief}

Generate a complete debate case using the ARES-I format for each point:
- A: Assertion (a clear, concise claim)
- R: Reasoning (detailed logical explanation of why the assertion is true, 3-5 sentences that thoroughly explain the logic)
- E: Evidence (facts, statistics, or examples that support the reasoning, with specific numbers and details)
- S: Source (a credible, real-world source for the evidence — be specific with names, years, publications, and credentials)
- I: Impact (why this point matters in the broader context of the debate)

Create 6 unique, well-developed points using this format. Each point should address a different aspect of the topic.

{no_fabrication}

Also include:
- An introduction that frames the debate (5-7 sentences)
- A conclusion that summarizes the key points (4-6 sentences)
- A suggested allocation of the 6 points between Speaker 1 and Speaker 2

Return a JSON object with this EXACT structure:
{
  "introduction": "string",
  "points": [
    {
      "assertion": "string",
      "reasoning": "string",
      "evidence": "string",
      "source": "string",
      "impact": "string"
    }
  ],
  "conclusion": "string",
  "speakerAllocation": {
    "speaker1": ["Point 1", "Point 2", "Point 3"],
    "speaker2": ["Point 4", "Point 5", "Point 6"]
  }
}

The "points" array MUST contain at least 6 entries, one ARES-I object per point.

{json_only}"#;

/// Builds the research-brief user prompt. Deterministic, no I/O.
pub fn build_research_prompt(topic: &str, stance: Stance) -> String {
    RESEARCH_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{stance}", stance.label())
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
}

/// Builds the case-synthesis user prompt with the research brief embedded as
/// grounding context. Deterministic, no I/O.
pub fn build_case_prompt(topic: &str, stance: Stance, research_brief: &str) -> String {
    CASE_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{stance}", stance.label())
        .replace("{research_brief}", research_brief)
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}
