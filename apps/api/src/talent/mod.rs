// Talent matching against the fixed candidate roster.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod roster;
