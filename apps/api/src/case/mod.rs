// Case generation — the research → synthesis prompt pipeline.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod validation;
