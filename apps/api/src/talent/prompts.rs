use crate::llm_client::prompts::JSON_ONLY_RULES;

/// Name of the tool that exposes the roster to the model.
pub const CANDIDATES_TOOL_NAME: &str = "get_available_candidates";

pub const CANDIDATES_TOOL_DESCRIPTION: &str =
    "Get the list of all available candidates to choose from.";

/// System prompt for talent matching.
pub fn talent_matching_system() -> String {
    format!("You are an expert recruiter. {JSON_ONLY_RULES}")
}

/// Talent matching prompt template. Replace `{job_description}` before sending.
pub const TALENT_MATCH_PROMPT_TEMPLATE: &str = r#"Find the best candidate for the job description below.

You have access to a list of available candidates. You MUST use the 'get_available_candidates' tool to see them before answering.

Select the single candidate whose skills and experience are most relevant to the role.

When you have decided, return a JSON object with this EXACT schema (no extra fields):
{
  "candidate_id": "<id of the chosen candidate, exactly as returned by the tool>"
}

Job Description:
{job_description}"#;
