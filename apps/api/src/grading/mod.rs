// Speech grading — single-round-trip rubric evaluation of a transcript.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod validation;
