// Skill extraction: the top skills an applicant should highlight for a posting.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod extractor;
pub mod handlers;
pub mod prompts;
