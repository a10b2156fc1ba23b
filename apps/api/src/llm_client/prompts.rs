// Shared prompt fragments. Each pipeline that needs LLM calls defines its
// own prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Instruction appended to every structured-output prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with the JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Anti-fabrication instruction shared by the research and synthesis prompts.
/// Factual quality is steered here, at the prompt level — the validators
/// only check structure.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    DO NOT make up or fabricate any statistics, studies, or sources. \
    If you are uncertain about specific facts, acknowledge the limitations \
    of available information.";
